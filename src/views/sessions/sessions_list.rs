use std::rc::Rc;

use yew::prelude::*;

use crate::components::{Button, NavigationButton};
use crate::hooks::use_sessions_context;
use crate::models::Session;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SessionsListProps {
    pub catalog: Rc<Vec<Session>>,
}

/// Catálogo de sesiones disponibles
#[function_component(SessionsList)]
pub fn sessions_list(props: &SessionsListProps) -> Html {
    let sessions = use_sessions_context();

    html! {
        <section class="sessions">
            <h2>{"Available mentoring sessions"}</h2>
            <ul class="sessions-list">
                { for props.catalog.iter().map(|session| {
                    let booked = sessions.upcoming_sessions().iter().any(|s| s.id == session.id);
                    html! {
                        <li key={session.id.clone()} class="session-item">
                            <img src={session.image.clone()} alt={session.title.clone()} />
                            <div class="session-data">
                                <h3>{session.title.clone()}</h3>
                                <p>{session.summary.clone()}</p>
                                if booked {
                                    <span class="session-badge">{"Booked"}</span>
                                }
                                <p class="actions">
                                    <Button variant={NavigationButton::to(Route::SessionDetail(session.id.clone()).to_path())}>
                                        {"Learn More"}
                                    </Button>
                                </p>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
