// ============================================================================
// BOOKING FORM - Formulario de reserva (sin validación)
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ActionButton, Button, Input};
use crate::dom::PassthroughAttrs;
use crate::hooks::use_sessions_context;
use crate::models::Session;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub session: Session,
    /// Se emite al reservar o cancelar
    pub on_done: Callback<()>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let sessions = use_sessions_context();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let session = props.session.clone();
        let on_done = props.on_done.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            log::info!("📝 [BOOKING] Reserva de '{}' para {}", name, session.id);

            sessions.book_session(session.clone());
            on_done.emit(());
        })
    };

    let on_cancel = props.on_done.reform(|_: MouseEvent| ());

    html! {
        <div class="modal">
            <h2>{"Book Session"}</h2>
            <p>{props.session.title.clone()}</p>
            <form {onsubmit}>
                <Input
                    id="name"
                    name="Your name"
                    node_ref={name_ref}
                    attrs={PassthroughAttrs::from([("autocomplete", "name")])}
                />
                <Input
                    id="email"
                    name="Your email"
                    input_type="email"
                    node_ref={email_ref}
                    attrs={PassthroughAttrs::from([("autocomplete", "email")])}
                />
                <p class="actions">
                    <Button variant={ActionButton::on_click(on_cancel)} text_only=true>
                        {"Cancel"}
                    </Button>
                    <Button variant={ActionButton::submit()}>{"Book Session"}</Button>
                </p>
            </form>
        </div>
    }
}
