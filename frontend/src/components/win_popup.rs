use shared::bet::format_money;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinPopupProps {
    pub amount: Option<f64>,
}

#[function_component(WinPopup)]
pub fn win_popup(props: &WinPopupProps) -> Html {
    let Some(amount) = props.amount else {
        return html! {};
    };

    html! {
        <div class={styles::WIN_POPUP}>
            <div class={styles::WIN_POPUP_CARD}>
                <div class="text-4xl font-extrabold">{"🎉 BIG WIN! 🎉"}</div>
                <div class="mt-2 text-3xl font-bold">{format_money(amount)}</div>
            </div>
        </div>
    }
}
