mod login_form;
mod register_form;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;

use shared::api::AuthResponse;
use shared::constants::AUTH_REDIRECT_DELAY_MS;
use web_sys::HtmlInputElement;
use yew::NodeRef;

use crate::api::navigate_to;
use crate::hooks::AppContext;

fn field_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Success alert now, redirect once the alert has had a moment on screen.
fn complete_auth(app: &AppContext, response: &AuthResponse, message: &str) {
    app.alerts.success(message);
    let target = response.redirect_target().to_string();
    log::info!("auth succeeded, redirecting to {}", target);
    app.scheduler.schedule(
        AUTH_REDIRECT_DELAY_MS,
        Box::new(move || navigate_to(&target)),
    );
}
