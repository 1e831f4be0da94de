use yew::prelude::*;

use crate::components::{Button, NavigationButton};
use crate::hooks::use_sessions_context;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let sessions = use_sessions_context();
    let upcoming_count = sessions.upcoming_sessions().len();

    html! {
        <header class="app-header">
            <h1>{props.title.clone()}</h1>
            <nav>
                <ul>
                    <li>
                        <Button variant={NavigationButton::to(Route::Sessions.to_path())} text_only=true>
                            {"Browse Sessions"}
                        </Button>
                    </li>
                    <li>
                        <Button variant={NavigationButton::to(Route::UpcomingSessions.to_path())}>
                            {format!("Upcoming Sessions ({})", upcoming_count)}
                        </Button>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
