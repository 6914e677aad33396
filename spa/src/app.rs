use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::{
    api::{self, client::ApiClient},
    auth::BrowserTokenStore,
    components::composite::{
        navigation_bar::NavigationBar,
        toast::{ToastAction, ToastQueue, ToastStack, Toaster},
    },
    pages::{
        login::LoginPage, register::RegisterPage, reservations::ReservationsPage,
        session_detail::SessionDetailPage, sessions::SessionsPage,
    },
    router::{self, Page},
};

#[function_component(App)]
pub fn app() -> Html {
    let api = use_memo((), |_| {
        ApiClient::new(api::base_url(), Rc::new(BrowserTokenStore))
    });

    let logged = use_state(|| api.tokens().get().is_some());
    let page = use_state(|| router::current(api.tokens().get().is_some()));

    // Back/forward re-resolves the page from the location.
    {
        let page = page.clone();
        let api = api.clone();
        use_event_with_window("popstate", move |_: web_sys::PopStateEvent| {
            page.set(router::current(api.tokens().get().is_some()));
        });
    }

    let toasts = use_reducer(ToastQueue::default);
    let toaster = Toaster::new({
        let toasts = toasts.clone();
        Callback::from(move |message| toasts.dispatch(ToastAction::Push(message)))
    });
    let on_toast_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| {
            router::push(&target);
            page.set(target);
        })
    };

    let on_open_session = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |id: String| {
            on_navigate.emit(Page::SessionDetail { id: Some(id) });
        })
    };

    let on_authenticated = {
        let api = api.clone();
        let logged = logged.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |token: String| {
            api.tokens().set(&token);
            logged.set(true);
            on_navigate.emit(Page::Sessions);
        })
    };

    let on_logout = {
        let api = api.clone();
        let logged = logged.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |_| {
            log::info!("User logged out");
            api.tokens().clear();
            logged.set(false);
            on_navigate.emit(Page::Login);
        })
    };

    let content = match &*page {
        Page::Login => html! {
            <LoginPage api={(*api).clone()}
                on_authenticated={on_authenticated.clone()}
                on_navigate={on_navigate.clone()} />
        },
        Page::Register => html! {
            <RegisterPage api={(*api).clone()}
                on_authenticated={on_authenticated.clone()}
                on_navigate={on_navigate.clone()} />
        },
        Page::Sessions => html! {
            <SessionsPage api={(*api).clone()} on_open={on_open_session.clone()} />
        },
        Page::SessionDetail { id } => html! {
            <SessionDetailPage api={(*api).clone()}
                id={id.clone()}
                on_navigate={on_navigate.clone()} />
        },
        Page::Reservations => html! {
            <ReservationsPage api={(*api).clone()} />
        },
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            <NavigationBar logged={*logged}
                active={(*page).clone()}
                on_navigate={on_navigate.clone()}
                on_logout={on_logout} />
            <div class="container mt-4">
                {content}
            </div>
            <ToastStack toasts={toasts.toasts.clone()} on_dismiss={on_toast_dismiss} />
        </ContextProvider<Toaster>>
    }
}
