use std::rc::Rc;

use shared::alerts::AlertKind;
use yew::prelude::*;

use crate::hooks::use_alerts;
use crate::styles;

fn alert_style(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => styles::ALERT_SUCCESS,
        AlertKind::Error => styles::ALERT_ERROR,
        AlertKind::Info => styles::ALERT_INFO,
        AlertKind::Warning => styles::ALERT_WARNING,
    }
}

/// Renders the shared alert queue, newest on top.
#[function_component(AlertStack)]
pub fn alert_stack() -> Html {
    let alerts = use_alerts();
    let redraw = use_force_update();

    {
        let alerts = Rc::clone(&alerts);
        use_effect_with((), move |_| {
            alerts.set_on_change(Some(Rc::new(move || redraw.force_update())));
            move || alerts.set_on_change(None)
        });
    }

    html! {
        <div class={styles::ALERT_STACK}>
            { for alerts.alerts().into_iter().map(|alert| {
                let dismiss = {
                    let alerts = Rc::clone(&alerts);
                    let id = alert.id;
                    Callback::from(move |_: MouseEvent| alerts.dismiss(id))
                };
                html! {
                    <div key={alert.id} class={classes!(alert_style(alert.kind), "flex", "justify-between", "items-start", "shadow-lg")}>
                        <span>{alert.message.clone()}</span>
                        <button class="ml-4 font-bold opacity-60 hover:opacity-100" onclick={dismiss}>{"×"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
