use yew::prelude::*;

use crate::components::{ActionButton, Button};
use crate::hooks::use_sessions_context;
use crate::models::Session;
use crate::views::sessions::BookingForm;

#[derive(Properties, PartialEq)]
pub struct SessionDetailProps {
    pub session: Session,
}

#[function_component(SessionDetail)]
pub fn session_detail(props: &SessionDetailProps) -> Html {
    let sessions = use_sessions_context();
    let is_booking = use_state(|| false);
    let session = &props.session;
    let booked = sessions.upcoming_sessions().iter().any(|s| s.id == session.id);

    let start_booking = {
        let is_booking = is_booking.clone();
        Callback::from(move |_: MouseEvent| is_booking.set(true))
    };
    let stop_booking = {
        let is_booking = is_booking.clone();
        Callback::from(move |_: ()| is_booking.set(false))
    };

    html! {
        <article id="session-page">
            if *is_booking {
                <BookingForm session={session.clone()} on_done={stop_booking} />
            }
            <header>
                <img src={session.image.clone()} alt={session.title.clone()} />
                <div>
                    <h2>{session.title.clone()}</h2>
                    <time datetime={session.date.clone()}>{session.date.clone()}</time>
                    <p class="duration">{format!("{} h", session.duration)}</p>
                    <p>
                        <Button variant={ActionButton::on_click(start_booking).disabled(booked)}>
                            { if booked { "Booked" } else { "Book Session" } }
                        </Button>
                    </p>
                </div>
            </header>
            <p id="content">{session.description.clone()}</p>
        </article>
    }
}
