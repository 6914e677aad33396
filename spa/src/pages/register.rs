use secrecy::SecretString;
use shared::RegisterRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::auth_api;
use crate::api::client::ApiClient;
use crate::components::composite::register_form::{RegisterForm, RegisterFormData};
use crate::components::composite::toast::{use_toaster, ToastLevel};
use crate::router::Page;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub api: ApiClient,
    pub on_authenticated: Callback<String>,
    pub on_navigate: Callback<Page>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &Props) -> Html {
    let toaster = use_toaster();

    let on_register = {
        let api = props.api.clone();
        let on_authenticated = props.on_authenticated.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: RegisterFormData| {
            let api = api.clone();
            let on_authenticated = on_authenticated.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let phone = Some(event.phone.trim().to_owned()).filter(|phone| !phone.is_empty());
                let request = RegisterRequest {
                    full_name: event.full_name,
                    email: event.email,
                    phone,
                    password: SecretString::from(event.password),
                };
                match auth_api::register(&api, &request).await {
                    Ok(response) => {
                        toaster.show("Registro exitoso", ToastLevel::Success);
                        on_authenticated.emit(response.access_token);
                    }
                    Err(error) => {
                        log::warn!("Register failed, error: {error}");
                        toaster.show(error.detail_or("Error en registro"), ToastLevel::Error);
                    }
                }
            });
        })
    };

    let on_go_login = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Login))
    };

    html! {
        <main>
            <RegisterForm on_register={on_register} />
            <p class="text-center">
                {"¿Ya tienes cuenta? "}
                <a onclick={on_go_login} class="link-primary" role="button">{"Inicia sesión"}</a>
            </p>
        </main>
    }
}
