use shared::Reservation;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::client::ApiClient;
use crate::api::reservations_api;
use crate::components::composite::toast::{use_toaster, ToastLevel};
use crate::format;

#[derive(Clone, PartialEq, Default)]
struct ReservationsState {
    reservations: Vec<Reservation>,
    is_loading: bool,
    error_message: Option<String>,
}

enum ReservationsMessage {
    Loaded(Result<Vec<Reservation>, String>),
}

impl Reducible for ReservationsState {
    type Action = ReservationsMessage;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ReservationsMessage::Loaded(result) => {
                state.is_loading = false;
                match result {
                    Ok(reservations) => {
                        state.reservations = reservations;
                        state.error_message = None;
                    }
                    Err(error) => {
                        state.error_message = Some(error);
                    }
                }
            }
        }
        std::rc::Rc::new(state)
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub api: ApiClient,
}

#[function_component(ReservationsPage)]
pub fn reservations_page(props: &Props) -> Html {
    let toaster = use_toaster();
    let state = use_reducer(|| ReservationsState {
        is_loading: true,
        ..Default::default()
    });

    use_effect_with((), {
        let state = state.clone();
        let api = props.api.clone();
        move |_| {
            spawn_local(async move {
                let action = match reservations_api::my_reservations(&api).await {
                    Ok(reservations) => ReservationsMessage::Loaded(Ok(reservations)),
                    Err(error) => {
                        log::error!("Fail to load reservations, error={error}");
                        ReservationsMessage::Loaded(Err("Error cargando reservas".to_owned()))
                    }
                };
                state.dispatch(action);
            });
        }
    });

    let on_cancel = {
        let api = props.api.clone();
        let toaster = toaster.clone();
        Callback::from(move |id: Uuid| {
            // Declined confirmation means no network call at all.
            if !confirm_cancellation() {
                return;
            }
            let api = api.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match reservations_api::cancel(&api, id).await {
                    Ok(()) => {
                        toaster.show("Reserva cancelada", ToastLevel::Success);
                        reload_page();
                    }
                    Err(error) => {
                        log::warn!("Cancel failed, id={id}, error={error}");
                        toaster.show(error.detail_or("Error al cancelar"), ToastLevel::Error);
                    }
                }
            });
        })
    };

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
    } else if state.reservations.is_empty() {
        html! { <p>{"No tienes reservas."}</p> }
    } else {
        state
            .reservations
            .iter()
            .map(|reservation| render_reservation(reservation, on_cancel.clone()))
            .collect::<Html>()
    };

    html! {
        <main>
            <h1 class="mb-4">{"Mis reservas"}</h1>
            {content}
        </main>
    }
}

fn render_reservation(reservation: &Reservation, on_cancel: Callback<Uuid>) -> Html {
    let on_click = {
        let id = reservation.id;
        Callback::from(move |_| on_cancel.emit(id))
    };
    html! {
        <div class="reservation card mb-3" key={reservation.id.to_string()}>
            <div class="card-body">
                <h3 class="card-title h5">{reservation.title()}</h3>
                <p class="card-text">
                    {format::reservation_time_range(
                        &reservation.session.start_time,
                        &reservation.session.end_time,
                    )}
                </p>
                <p class="card-text">{format!("Estado: {}", reservation.status)}</p>
                <button onclick={on_click} class="btn btn-outline-danger cancel-btn">
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

fn confirm_cancellation() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message("Confirmas cancelar esta reserva?")
                .ok()
        })
        .unwrap_or(false)
}

// Full reload after a cancellation, the list is re-fetched from scratch.
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(error) = window.location().reload() {
            log::warn!("Fail to reload page, error={error:?}");
        }
    }
}
