use shared::{ReserveRequest, Session};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::client::ApiClient;
use crate::api::{reservations_api, sessions_api};
use crate::components::composite::toast::{use_toaster, ToastLevel};
use crate::format;
use crate::router::Page;

#[derive(Clone, PartialEq, Default)]
struct SessionDetailState {
    session: Option<Session>,
    is_loading: bool,
    error_message: Option<String>,
    auto_waitlist: bool,
    outcome_message: Option<String>,
}

enum SessionDetailMessage {
    Loaded(Result<Option<Session>, String>),
    AutoWaitlistToggled(bool),
    Reserved(String),
}

impl Reducible for SessionDetailState {
    type Action = SessionDetailMessage;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut state = (*self).clone();
        match action {
            SessionDetailMessage::Loaded(result) => {
                state.is_loading = false;
                match result {
                    Ok(Some(session)) => {
                        state.session = Some(session);
                        state.error_message = None;
                    }
                    Ok(None) => {
                        state.error_message = Some("Sesión no encontrada".to_owned());
                    }
                    Err(error) => {
                        state.error_message = Some(error);
                    }
                }
            }
            SessionDetailMessage::AutoWaitlistToggled(enabled) => {
                state.auto_waitlist = enabled;
            }
            SessionDetailMessage::Reserved(message) => {
                state.outcome_message = Some(message);
            }
        }
        std::rc::Rc::new(state)
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub api: ApiClient,
    /// Session id from the query string; a missing one is reported without
    /// touching the network.
    pub id: Option<String>,
    pub on_navigate: Callback<Page>,
}

#[function_component(SessionDetailPage)]
pub fn session_detail_page(props: &Props) -> Html {
    let toaster = use_toaster();
    let state = use_reducer(|| SessionDetailState {
        is_loading: props.id.is_some(),
        ..Default::default()
    });

    use_effect_with(props.id.clone(), {
        let state = state.clone();
        let api = props.api.clone();
        move |id: &Option<String>| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    let result = sessions_api::get_or_scan(&api, &id).await;
                    let action = match result {
                        Ok(session) => SessionDetailMessage::Loaded(Ok(session)),
                        Err(error) => {
                            log::error!("Fail to load session detail, id={id}, error={error}");
                            SessionDetailMessage::Loaded(Err("Error cargando detalle".to_owned()))
                        }
                    };
                    state.dispatch(action);
                });
            }
        }
    });

    let on_toggle_waitlist = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            let target: EventTarget = event.target().expect("Fail to cast to EventTarget");
            let checked = target.unchecked_into::<HtmlInputElement>().checked();
            state.dispatch(SessionDetailMessage::AutoWaitlistToggled(checked));
        })
    };

    let on_reserve = {
        let state = state.clone();
        let api = props.api.clone();
        let toaster = toaster.clone();
        Callback::from(move |_| {
            let Some(session) = state.session.clone() else {
                return;
            };
            let request = ReserveRequest {
                session_id: session.id,
                auto_waitlist: state.auto_waitlist,
            };
            let state = state.clone();
            let api = api.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match reservations_api::reserve(&api, &request).await {
                    Ok(outcome) => {
                        let message = outcome.message();
                        toaster.show(message.clone(), ToastLevel::Success);
                        state.dispatch(SessionDetailMessage::Reserved(message));
                    }
                    Err(error) => {
                        log::warn!("Reserve failed, error: {error}");
                        toaster.show(error.detail_or("Error al reservar"), ToastLevel::Error);
                    }
                }
            });
        })
    };

    let on_go_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Sessions))
    };

    let content = if props.id.is_none() {
        html! { <p class="text-danger">{"ID de sesión faltante"}</p> }
    } else if state.is_loading {
        html! {
            <div class="text-center">
                <div class="spinner-border" role="status">
                    <span class="visually-hidden">{"Cargando..."}</span>
                </div>
            </div>
        }
    } else if let Some(error) = &state.error_message {
        html! { <p class="text-danger">{error}</p> }
    } else if let Some(session) = &state.session {
        html! {
            <>
                <h2>{session.title()}</h2>
                <p>{format::session_time_range(&session.start_time, &session.end_time)}</p>
                <p>{format!("Capacidad: {}", session.capacity)}</p>
                <div class="form-check mb-3">
                    <input
                        class="form-check-input"
                        type="checkbox"
                        id="auto-waitlist"
                        checked={state.auto_waitlist}
                        onchange={on_toggle_waitlist} />
                    <label class="form-check-label" for="auto-waitlist">
                        {"Pasar a lista de espera si está llena"}
                    </label>
                </div>
                <button id="reserve-btn" class="btn btn-primary" onclick={on_reserve}>
                    {"Reservar"}
                </button>
                if let Some(outcome) = &state.outcome_message {
                    <div id="reserve-result" class="mt-3">{outcome}</div>
                }
            </>
        }
    } else {
        html! {}
    };

    html! {
        <main>
            {content}
            <p class="mt-4">
                <a onclick={on_go_back} class="link-secondary" role="button">
                    {"« Volver a sesiones"}
                </a>
            </p>
        </main>
    }
}
