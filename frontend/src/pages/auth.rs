use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    base::Base,
    components::auth::{LoginForm, RegisterForm},
    styles,
};

#[derive(Clone, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: AuthMode,
}

#[function_component(Auth)]
pub fn auth(props: &Props) -> Html {
    html! {
        <Base>
            <div class="min-h-screen w-full px-4 sm:px-6 lg:px-8">
                <div class="max-w-md mx-auto px-4 sm:px-6 py-8">
                    {
                        match props.mode {
                            AuthMode::Login => html! {
                                <>
                                    <LoginForm />
                                    <p class={classes!(styles::TEXT_SECONDARY, "mt-4", "text-center")}>
                                        {"Don't have an account? "}
                                        <Link<Route> to={Route::Register} classes={styles::LINK}>
                                            {"Register"}
                                        </Link<Route>>
                                    </p>
                                </>
                            },
                            AuthMode::Register => html! {
                                <>
                                    <RegisterForm />
                                    <p class={classes!(styles::TEXT_SECONDARY, "mt-4", "text-center")}>
                                        {"Already have an account? "}
                                        <Link<Route> to={Route::Login} classes={styles::LINK}>
                                            {"Login"}
                                        </Link<Route>>
                                    </p>
                                </>
                            },
                        }
                    }
                </div>
            </div>
        </Base>
    }
}
