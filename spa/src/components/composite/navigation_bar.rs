use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::assets_api;
use crate::components::atoms::safe_html::FragmentHtml;
use crate::router::Page;

const HEADER_FRAGMENT_PATH: &str = "/static/components/header.html";

#[derive(PartialEq, Properties)]
pub struct Props {
    pub logged: bool,
    pub active: Page,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &Props) -> Html {
    // Optional static header fragment; a missing one never breaks the page.
    let fragment = use_state(|| None::<String>);
    use_effect_with((), {
        let fragment = fragment.clone();
        move |_| {
            spawn_local(async move {
                if let Some(html) = assets_api::fetch_fragment(HEADER_FRAGMENT_PATH).await {
                    fragment.set(Some(html));
                }
            });
        }
    });

    let on_sessions_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            on_navigate.emit(Page::Sessions);
        })
    };

    let on_reservations_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            on_navigate.emit(Page::Reservations);
        })
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    let sessions_classes = if matches!(
        props.active,
        Page::Sessions | Page::SessionDetail { .. }
    ) {
        classes!("nav-link", "active")
    } else {
        classes!("nav-link")
    };
    let reservations_classes = if props.active == Page::Reservations {
        classes!("nav-link", "active")
    } else {
        classes!("nav-link")
    };

    let header_fragment = match fragment.as_ref() {
        Some(html) => html! { <FragmentHtml html={html.clone()} /> },
        None => html! {},
    };

    html! {
        <>
            {header_fragment}
            <nav class="navbar navbar-expand-lg bg-body-tertiary">
                <div class="container-fluid">
                    <a class="navbar-brand" href="/sessions">{"Gym Reservas"}</a>
                    <div class="collapse navbar-collapse">
                        <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                            <li class="nav-item">
                                <a onclick={on_sessions_click} class={sessions_classes}>{"Sesiones"}</a>
                            </li>
                            <li class="nav-item">
                                <a onclick={on_reservations_click} class={reservations_classes}>{"Mis reservas"}</a>
                            </li>
                        </ul>
                        if props.logged {
                            <button id="logout-btn" onclick={on_logout_click}
                                class="btn btn-sm btn-outline-secondary">
                                {"Salir"}
                            </button>
                        }
                    </div>
                </div>
            </nav>
        </>
    }
}
