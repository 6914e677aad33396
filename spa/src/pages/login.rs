use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::auth_api;
use crate::api::client::ApiClient;
use crate::components::composite::login_form::{LoginForm, LoginFormData};
use crate::components::composite::toast::{use_toaster, ToastLevel};
use crate::router::Page;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub api: ApiClient,
    pub on_authenticated: Callback<String>,
    pub on_navigate: Callback<Page>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &Props) -> Html {
    let toaster = use_toaster();

    let on_login = {
        let api = props.api.clone();
        let on_authenticated = props.on_authenticated.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: LoginFormData| {
            let api = api.clone();
            let on_authenticated = on_authenticated.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match auth_api::login(&api, &event.username, &event.password).await {
                    Ok(response) => {
                        log::info!(
                            "User login successful, username={username}",
                            username = &event.username
                        );
                        on_authenticated.emit(response.access_token);
                    }
                    Err(error) => {
                        log::warn!("Login failed, error: {error}");
                        toaster.show(error.detail_or("Error en login"), ToastLevel::Error);
                    }
                }
            });
        })
    };

    let on_go_register = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Register))
    };

    html! {
        <main>
            <LoginForm on_login={on_login} />
            <p class="text-center">
                {"¿No tienes cuenta? "}
                <a onclick={on_go_register} class="link-primary" role="button">{"Regístrate"}</a>
            </p>
        </main>
    }
}
