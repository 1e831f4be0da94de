use yew::prelude::*;

use crate::components::{ActionButton, Button};
use crate::hooks::use_sessions_context;

/// Sesiones reservadas, con opción de cancelar
#[function_component(UpcomingSessions)]
pub fn upcoming_sessions() -> Html {
    let sessions = use_sessions_context();

    if sessions.upcoming_sessions().is_empty() {
        return html! {
            <section class="upcoming-sessions">
                <h2>{"Upcoming Sessions"}</h2>
                <p>{"You have no upcoming sessions."}</p>
            </section>
        };
    }

    html! {
        <section class="upcoming-sessions">
            <h2>{"Upcoming Sessions"}</h2>
            <ul>
                { for sessions.upcoming_sessions().iter().map(|session| {
                    let on_cancel = {
                        let sessions = sessions.clone();
                        let session_id = session.id.clone();
                        Callback::from(move |_: MouseEvent| sessions.cancel_session(&session_id))
                    };
                    html! {
                        <li key={session.id.clone()} class="upcoming-session">
                            <div>
                                <h3>{session.title.clone()}</h3>
                                <p>{session.summary.clone()}</p>
                                <time datetime={session.date.clone()}>{session.date.clone()}</time>
                            </div>
                            <p class="actions">
                                <Button variant={ActionButton::on_click(on_cancel)} text_only=true>
                                    {"Cancel"}
                                </Button>
                            </p>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
