use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use shared::api::{AuthStatus, MessageResponse};
use shared::bet::format_money;
use shared::constants::{AUTH_STATUS_ENDPOINT, LOGOUT_ENDPOINT, LOGOUT_FAILED};

use crate::api::{get_json, navigate_to, post_empty};
use crate::components::AlertStack;
use crate::hooks::{use_alerts, use_balance};
use crate::{Route, styles};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let alerts = use_alerts();
    let status = use_state(|| None::<AuthStatus>);
    let initial_balance = (*status)
        .as_ref()
        .and_then(|s| s.user.as_ref())
        .map(|u| u.balance);
    let balance = use_balance(initial_balance);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match get_json::<AuthStatus>(AUTH_STATUS_ENDPOINT).await {
                    Ok(current) => status.set(Some(current)),
                    Err(err) => log::error!("auth check failed: {}", err),
                }
            });
            || ()
        });
    }

    let handle_logout = {
        let alerts = alerts.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let alerts = alerts.clone();
            spawn_local(async move {
                match post_empty::<MessageResponse>(LOGOUT_ENDPOINT).await {
                    Ok(_) => navigate_to("/"),
                    Err(err) => {
                        log::error!("logout failed: {}", err);
                        alerts.error(LOGOUT_FAILED);
                    }
                }
            });
        })
    };

    let authenticated = (*status).as_ref().map(|s| s.authenticated).unwrap_or(false);
    let username = (*status)
        .as_ref()
        .and_then(|s| s.user.as_ref())
        .map(|u| u.username.clone())
        .unwrap_or_default();
    let is_staff = (*status)
        .as_ref()
        .and_then(|s| s.user.as_ref())
        .map(|u| u.role == "admin" || u.role == "moderator")
        .unwrap_or(false);

    html! {
        <div class="dark h-full bg-gray-900">
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between">
                        <div class="flex items-center space-x-6">
                            <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"🎰 Casino"}</Link<Route>>
                            <Link<Route> to={Route::Games} classes={styles::NAV_LINK}>{"Games"}</Link<Route>>
                            <Link<Route> to={Route::Slots} classes={styles::NAV_LINK}>{"Slots"}</Link<Route>>
                            <Link<Route> to={Route::Support} classes={styles::NAV_LINK}>{"Support"}</Link<Route>>
                            if is_staff {
                                <Link<Route> to={Route::Admin} classes={styles::NAV_LINK}>{"Admin"}</Link<Route>>
                            }
                        </div>
                        <div class={styles::NAV_ITEMS}>
                            if authenticated {
                                <span class="px-3 py-1 bg-gray-700 rounded-lg text-sm font-medium text-amber-300">
                                    {(*balance).map(format_money).unwrap_or_default()}
                                </span>
                                <span class={styles::NAV_LINK}>{username}</span>
                                <button onclick={handle_logout} class={styles::BUTTON_DANGER}>{"Logout"}</button>
                            } else {
                                <Link<Route> to={Route::Login} classes={styles::NAV_LINK}>{"Login"}</Link<Route>>
                                <Link<Route> to={Route::Register} classes={styles::NAV_LINK}>{"Register"}</Link<Route>>
                            }
                        </div>
                    </div>
                </div>
            </nav>
            <AlertStack />
            <main class="pt-16 min-h-screen">{props.children.clone()}</main>
        </div>
    }
}
