pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod scheduler;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::AppContext;
use crate::pages::{
    admin::Admin,
    auth::{Auth, AuthMode},
    games::Games,
    slots::Slots,
    support::Support,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/login")] Login,
    #[at("/register")] Register,
    #[at("/dashboard")] Dashboard,
    #[at("/games")] Games,
    #[at("/slots")] Slots,
    #[at("/admin")] Admin,
    #[at("/support")] Support,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let context = use_state(AppContext::new);

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <BrowserRouter>
                <div class="min-h-screen w-full">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Dashboard | Route::Games => html! { <Games /> },
        Route::Login => html! { <Auth mode={AuthMode::Login} /> },
        Route::Register => html! { <Auth mode={AuthMode::Register} /> },
        Route::Slots => html! { <Slots /> },
        Route::Admin => html! { <Admin /> },
        Route::Support => html! { <Support /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
