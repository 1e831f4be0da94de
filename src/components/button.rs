// ============================================================================
// BUTTON - Botón o enlace según la variante
// ============================================================================
// NavigationButton -> <a href> con navegación vía History API
// ActionButton     -> <button type> con callback opcional
// ============================================================================

use yew::html::IntoPropValue;
use yew::prelude::*;

use crate::dom::{is_modified_click, navigate, PassthroughAttrs};

pub const BUTTON_CLASS: &str = "button";
pub const TEXT_ONLY_CLASS: &str = "button--text-only";

/// Enlace a una ruta de la app
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationButton {
    pub to: AttrValue,
    /// Sustituir la entrada del historial en vez de añadir una nueva
    pub replace: bool,
}

impl NavigationButton {
    pub fn to(to: impl Into<AttrValue>) -> Self {
        Self {
            to: to.into(),
            replace: false,
        }
    }

    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }
}

/// Tipo del `<button>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonKind {
    /// Default de HTML
    #[default]
    Submit,
    Button,
    Reset,
}

impl ButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonKind::Submit => "submit",
            ButtonKind::Button => "button",
            ButtonKind::Reset => "reset",
        }
    }
}

/// Botón de acción
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionButton {
    pub kind: ButtonKind,
    pub onclick: Option<Callback<MouseEvent>>,
    pub disabled: bool,
}

impl ActionButton {
    /// `type="submit"`
    pub fn submit() -> Self {
        Self::default()
    }

    /// `type="button"` con callback de click
    pub fn on_click(onclick: Callback<MouseEvent>) -> Self {
        Self {
            kind: ButtonKind::Button,
            onclick: Some(onclick),
            disabled: false,
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ButtonVariant {
    Navigation(NavigationButton),
    Action(ActionButton),
}

impl From<NavigationButton> for ButtonVariant {
    fn from(button: NavigationButton) -> Self {
        ButtonVariant::Navigation(button)
    }
}

impl From<ActionButton> for ButtonVariant {
    fn from(button: ActionButton) -> Self {
        ButtonVariant::Action(button)
    }
}

impl IntoPropValue<ButtonVariant> for NavigationButton {
    fn into_prop_value(self) -> ButtonVariant {
        self.into()
    }
}

impl IntoPropValue<ButtonVariant> for ActionButton {
    fn into_prop_value(self) -> ButtonVariant {
        self.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    /// Estilo reducido (solo texto)
    #[prop_or_default]
    pub text_only: bool,
    /// Clases extra
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: PassthroughAttrs,
    #[prop_or_default]
    pub children: Html,
}

/// Clases del botón: siempre `button`, más el modificador si es text-only
pub fn button_classes(text_only: bool) -> Classes {
    let mut classes = classes!(BUTTON_CLASS);
    if text_only {
        classes.push(TEXT_ONLY_CLASS);
    }
    classes
}

/// ¿El click en el enlace se resuelve dentro de la app?
///
/// No si el enlace abre otra ventana (`target` distinto de `_self`), es una
/// descarga, o apunta fuera del origen (URL absoluta, `//host`, `mailto:`...).
pub fn handles_navigation_in_app(to: &str, attrs: &PassthroughAttrs) -> bool {
    if let Some(target) = attrs.get("target") {
        if !target.is_empty() && !target.eq_ignore_ascii_case("_self") {
            return false;
        }
    }
    if attrs.get("download").is_some() {
        return false;
    }
    is_app_path(to)
}

/// Path relativo al origen actual (sin esquema ni host)
fn is_app_path(to: &str) -> bool {
    if to.starts_with("//") {
        return false;
    }
    match to.find(':') {
        // "mailto:x", "https://x"... pero no "/a?b=c:d"
        Some(colon) => to[..colon].contains(['/', '?', '#']),
        None => true,
    }
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(button_classes(props.text_only), props.class.clone());

    let node = match &props.variant {
        ButtonVariant::Navigation(link) => {
            let onclick = {
                let to = link.to.clone();
                let replace = link.replace;
                let in_app = handles_navigation_in_app(&to, &props.attrs);
                Callback::from(move |e: MouseEvent| {
                    if !in_app || is_modified_click(&e) {
                        return;
                    }
                    e.prevent_default();
                    if let Err(err) = navigate(&to, replace) {
                        log::error!("❌ [BUTTON] Error navegando a {}: {:?}", to, err);
                    }
                })
            };

            html! {
                <a {class} href={link.to.clone()} {onclick}>
                    {props.children.clone()}
                </a>
            }
        }
        ButtonVariant::Action(action) => html! {
            <button
                {class}
                type={action.kind.as_str()}
                disabled={action.disabled}
                onclick={action.onclick.clone()}
            >
                {props.children.clone()}
            </button>
        },
    };

    props.attrs.apply_to(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_without_text_only() {
        let classes = button_classes(false);
        assert!(classes.contains(BUTTON_CLASS));
        assert!(!classes.contains(TEXT_ONLY_CLASS));
        assert_eq!(classes.to_string(), "button");
    }

    #[test]
    fn classes_with_text_only() {
        let classes = button_classes(true);
        assert!(classes.contains(BUTTON_CLASS));
        assert!(classes.contains(TEXT_ONLY_CLASS));
        assert_eq!(classes.to_string(), "button button--text-only");
    }

    #[test]
    fn variant_constructors() {
        let link: ButtonVariant = NavigationButton::to("/sessions").replace().into();
        assert_eq!(
            link,
            ButtonVariant::Navigation(NavigationButton {
                to: AttrValue::Static("/sessions"),
                replace: true,
            })
        );

        let action: ButtonVariant = ActionButton::submit().disabled(true).into();
        match action {
            ButtonVariant::Action(action) => {
                assert_eq!(action.kind, ButtonKind::Submit);
                assert!(action.disabled);
                assert!(action.onclick.is_none());
            }
            ButtonVariant::Navigation(_) => panic!("expected action button"),
        }
    }

    #[test]
    fn in_app_paths_are_intercepted() {
        let none = PassthroughAttrs::new();
        assert!(handles_navigation_in_app("/sessions", &none));
        assert!(handles_navigation_in_app("sessions/s1", &none));
        assert!(handles_navigation_in_app("/search?q=a:b", &none));
        assert!(handles_navigation_in_app(
            "/upcoming",
            &PassthroughAttrs::new().with("target", "_self")
        ));
    }

    #[test]
    fn new_window_and_download_links_are_left_to_browser() {
        let blank = PassthroughAttrs::new().with("target", "_blank");
        assert!(!handles_navigation_in_app("/sessions", &blank));

        let download = PassthroughAttrs::new().with("download", "");
        assert!(!handles_navigation_in_app("/assets/agenda.pdf", &download));
    }

    #[test]
    fn external_urls_are_left_to_browser() {
        let none = PassthroughAttrs::new();
        assert!(!handles_navigation_in_app("https://example.com", &none));
        assert!(!handles_navigation_in_app("//cdn.example.com/x", &none));
        assert!(!handles_navigation_in_app("mailto:mentor@example.com", &none));
    }

    #[test]
    fn button_kind_attribute_values() {
        assert_eq!(ButtonKind::default().as_str(), "submit");
        assert_eq!(ButtonKind::Button.as_str(), "button");
        assert_eq!(ButtonKind::Reset.as_str(), "reset");
    }
}
