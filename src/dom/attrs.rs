// ============================================================================
// PASSTHROUGH ATTRS - Atributos extra que se copian tal cual al elemento
// ============================================================================

use yew::prelude::*;
use yew::virtual_dom::VNode;

/// Lista ordenada de atributos HTML arbitrarios (`aria-label`, `placeholder`,
/// `data-*`...). Se aplican después de los atributos propios del componente.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassthroughAttrs(Vec<(&'static str, AttrValue)>);

impl PassthroughAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añadir atributo (builder)
    pub fn with(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.iter().rev().find(|(key, _)| *key == name).map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, AttrValue)> {
        self.0.iter()
    }

    /// Copiar los atributos al nodo raíz si es una etiqueta HTML
    pub fn apply_to(&self, mut node: Html) -> Html {
        if let VNode::VTag(tag) = &mut node {
            for (name, value) in &self.0 {
                tag.add_attribute(*name, value.clone());
            }
        }
        node
    }
}

impl<const N: usize> From<[(&'static str, &'static str); N]> for PassthroughAttrs {
    fn from(attrs: [(&'static str, &'static str); N]) -> Self {
        Self(
            attrs
                .into_iter()
                .map(|(name, value)| (name, AttrValue::Static(value)))
                .collect(),
        )
    }
}
