use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(Debug, PartialEq, Default, Clone)]
pub struct RegisterFormData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_register: Callback<RegisterFormData>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &Props) -> Html {
    let state = use_state(RegisterFormData::default);

    let on_change_full_name = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.full_name = input_text;
            state.set(data);
        })
    };

    let on_change_email = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.email = input_text;
            state.set(data);
        })
    };

    let on_change_phone = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.phone = input_text;
            state.set(data);
        })
    };

    let on_change_password = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.password = input_text;
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_register = props.on_register.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut data = (*state).clone();
            data.full_name = data.full_name.trim().to_owned();
            data.email = data.email.trim().to_owned();
            if !data.full_name.is_empty() && !data.email.is_empty() && !data.password.is_empty() {
                on_register.emit(data);
            }
        })
    };

    html! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-4">
                    <h2 class="text-center mb-4">{"Crear cuenta"}</h2>
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label for="full_name" class="form-label">{"Nombre completo"}</label>
                            <InputText
                                id="full_name"
                                name="full_name"
                                placeholder="Tu nombre"
                                class={"form-control"}
                                input_type={InputType::Text}
                                required={true}
                                on_change={on_change_full_name} />
                        </div>
                        <div class="mb-3">
                            <label for="email" class="form-label">{"Email"}</label>
                            <InputText
                                id="email"
                                name="email"
                                placeholder="tu@email.com"
                                class={"form-control"}
                                input_type={InputType::Email}
                                required={true}
                                on_change={on_change_email} />
                        </div>
                        <div class="mb-3">
                            <label for="phone" class="form-label">{"Teléfono (opcional)"}</label>
                            <InputText
                                id="phone"
                                name="phone"
                                placeholder="+34 600 000 000"
                                class={"form-control"}
                                input_type={InputType::Tel}
                                on_change={on_change_phone} />
                        </div>
                        <div class="mb-3">
                            <label for="password" class="form-label">{"Contraseña"}</label>
                            <InputText
                                id="password"
                                name="password"
                                placeholder="Elige una contraseña"
                                class={"form-control"}
                                input_type={InputType::Password}
                                required={true}
                                on_change={on_change_password} />
                        </div>
                        <div class="d-grid">
                            <input class="btn btn-primary" type="submit" value="Registrarme" />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
