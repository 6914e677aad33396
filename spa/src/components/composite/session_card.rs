use shared::Session;
use yew::prelude::*;

use crate::format;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub session: Session,
    pub on_open: Callback<String>,
}

#[function_component(SessionCard)]
pub fn session_card(props: &Props) -> Html {
    let session = &props.session;
    let on_click = {
        let on_open = props.on_open.clone();
        let id = session.id.to_string();
        Callback::from(move |_| on_open.emit(id.clone()))
    };
    html! {
        <article class="card mb-3">
            <div class="card-body">
                <h5 class="card-title">{session.title()}</h5>
                <p class="card-text">
                    {format::session_time_range(&session.start_time, &session.end_time)}
                </p>
                <p class="card-text">{format!("Capacidad: {}", session.capacity)}</p>
                <a onclick={on_click} class="btn btn-primary">{"Ver / Reservar"}</a>
            </div>
        </article>
    }
}
