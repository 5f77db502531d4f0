use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use shared::api::{AuthResponse, RegisterRequest};
use shared::constants::{REGISTER_ENDPOINT, REGISTER_SUCCESS};
use shared::validation::{error_message, validate_registration};

use super::{complete_auth, field_value};
use crate::api::post_json;
use crate::hooks::use_app;
use crate::hooks::validation::{use_password_checklist, PasswordRequirements};
use crate::styles;

#[function_component(RegisterForm)]
pub fn register_form() -> Html {
    let app = use_app();
    let loading = use_state(|| false);
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let (checklist, check_password) = use_password_checklist();

    let onsubmit = {
        let app = app.clone();
        let loading = loading.clone();
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let request = RegisterRequest::new(
                &field_value(&username_ref),
                &field_value(&email_ref),
                &field_value(&password_ref),
            );
            if let Err(err) = validate_registration(&request, &field_value(&confirm_ref)) {
                app.alerts.error(error_message(&err));
                return;
            }
            loading.set(true);

            let app = app.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match post_json::<_, AuthResponse>(REGISTER_ENDPOINT, &request, true).await {
                    Ok(response) => complete_auth(&app, &response, REGISTER_SUCCESS),
                    Err(err) => {
                        app.alerts.error(err.user_message());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_password_input = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        check_password.emit(input.value());
    });

    html! {
        <div class={styles::AUTH_CARD}>
            <div class={styles::AUTH_HEADER}>
                <h2 class={styles::TEXT_H2}>{"Create an Account"}</h2>
                <p class={styles::TEXT_SMALL}>{"Sign up to get started"}</p>
            </div>
            <form {onsubmit} class={styles::FORM}>
                <div>
                    <label for="username" class={styles::TEXT_LABEL}>{"Username"}</label>
                    <input
                        id="username"
                        type="text"
                        ref={username_ref}
                        required=true
                        disabled={*loading}
                        placeholder="Choose a username"
                        class={styles::INPUT}
                    />
                </div>
                <div>
                    <label for="email" class={styles::TEXT_LABEL}>{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        ref={email_ref}
                        required=true
                        disabled={*loading}
                        placeholder="Enter your email"
                        class={styles::INPUT}
                    />
                </div>
                <div>
                    <label for="password" class={styles::TEXT_LABEL}>{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        ref={password_ref}
                        required=true
                        disabled={*loading}
                        placeholder="Choose a password"
                        class={styles::INPUT}
                        oninput={on_password_input}
                    />
                    <PasswordRequirements checklist={(*checklist).clone()} />
                </div>
                <div>
                    <label for="confirm_password" class={styles::TEXT_LABEL}>{"Confirm Password"}</label>
                    <input
                        id="confirm_password"
                        type="password"
                        ref={confirm_ref}
                        required=true
                        disabled={*loading}
                        placeholder="Repeat your password"
                        class={styles::INPUT}
                    />
                </div>
                <button type="submit" disabled={*loading} class={styles::AUTH_BUTTON}>
                    { if *loading { "Creating Account..." } else { "Create Account" } }
                </button>
            </form>
        </div>
    }
}
