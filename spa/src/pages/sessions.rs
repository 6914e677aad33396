use shared::Session;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::client::ApiClient;
use crate::api::sessions_api;
use crate::components::composite::session_card::SessionCard;

#[derive(Clone, PartialEq, Default)]
struct SessionsState {
    sessions: Vec<Session>,
    is_loading: bool,
    error_message: Option<String>,
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub api: ApiClient,
    pub on_open: Callback<String>,
}

#[function_component(SessionsPage)]
pub fn sessions_page(props: &Props) -> Html {
    let state = use_state(|| SessionsState {
        is_loading: true,
        ..Default::default()
    });

    use_effect_with((), {
        let state = state.clone();
        let api = props.api.clone();
        move |_| {
            spawn_local(async move {
                match sessions_api::list(&api).await {
                    Ok(sessions) => state.set(SessionsState {
                        sessions,
                        is_loading: false,
                        error_message: None,
                    }),
                    Err(error) => {
                        log::error!("Fail to load sessions, error={error}");
                        state.set(SessionsState {
                            sessions: Vec::new(),
                            is_loading: false,
                            error_message: Some("Error cargando sesiones".to_owned()),
                        });
                    }
                }
            });
        }
    });

    let content = if state.is_loading {
        html! {
            <div class="text-center">
                <div class="spinner-border" role="status">
                    <span class="visually-hidden">{"Cargando..."}</span>
                </div>
            </div>
        }
    } else if let Some(error) = &state.error_message {
        html! { <p class="text-danger">{error}</p> }
    } else if state.sessions.is_empty() {
        html! { <p>{"No hay sesiones."}</p> }
    } else {
        state
            .sessions
            .iter()
            .map(|session| {
                html! {
                    <SessionCard
                        key={session.id.to_string()}
                        session={session.clone()}
                        on_open={props.on_open.clone()} />
                }
            })
            .collect::<Html>()
    };

    html! {
        <main>
            <h1 class="mb-4">{"Sesiones"}</h1>
            {content}
        </main>
    }
}
