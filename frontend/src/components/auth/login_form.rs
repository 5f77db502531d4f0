use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;
use shared::api::{AuthResponse, LoginRequest};
use shared::constants::{LOGIN_ENDPOINT, LOGIN_SUCCESS};

use super::{complete_auth, field_value};
use crate::api::post_json;
use crate::hooks::use_app;
use crate::styles;

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let app = use_app();
    let loading = use_state(|| false);
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let app = app.clone();
        let loading = loading.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let request = LoginRequest::new(&field_value(&username_ref), &field_value(&password_ref));
            loading.set(true);

            let app = app.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match post_json::<_, AuthResponse>(LOGIN_ENDPOINT, &request, true).await {
                    Ok(response) => complete_auth(&app, &response, LOGIN_SUCCESS),
                    Err(err) => {
                        app.alerts.error(err.user_message());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class={styles::AUTH_CARD}>
            <div class={styles::AUTH_HEADER}>
                <h2 class={styles::TEXT_H2}>{"Welcome Back"}</h2>
                <p class={styles::TEXT_SMALL}>{"Sign in to your account"}</p>
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
                        placeholder="Enter your username"
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
                        placeholder="Enter your password"
                        class={styles::INPUT}
                    />
                </div>
                <button type="submit" disabled={*loading} class={styles::AUTH_BUTTON}>
                    { if *loading { "Signing in..." } else { "Sign In" } }
                </button>
            </form>
        </div>
    }
}
