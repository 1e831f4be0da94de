// ============================================================================
// INPUT - Campo de texto con label
// ============================================================================

use yew::prelude::*;

use crate::dom::PassthroughAttrs;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub id: AttrValue,
    /// Texto del label y `name` del campo en el formulario
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub oninput: Option<Callback<InputEvent>>,
    /// Atributos extra del `<input>` (placeholder, required...)
    #[prop_or_default]
    pub attrs: PassthroughAttrs,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let field = html! {
        <input
            type={props.input_type.clone()}
            id={props.id.clone()}
            name={props.name.clone()}
            ref={props.node_ref.clone()}
            oninput={props.oninput.clone()}
        />
    };

    html! {
        <div class="control">
            <label for={props.id.clone()}>{props.name.clone()}</label>
            {props.attrs.apply_to(field)}
        </div>
    }
}
