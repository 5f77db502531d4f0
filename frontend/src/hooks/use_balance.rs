use gloo::events::EventListener;
use shared::constants::BALANCE_UPDATE_EVENT;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;

pub fn dispatch_balance_event(balance: f64) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_f64(balance));
        match CustomEvent::new_with_event_init_dict(BALANCE_UPDATE_EVENT, &event_init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(_) => log::warn!("could not create {} event", BALANCE_UPDATE_EVENT),
        }
    }
}

/// Balance shown in the nav bar, kept current by `balanceUpdate` events.
#[hook]
pub fn use_balance(initial: Option<f64>) -> UseStateHandle<Option<f64>> {
    let balance = use_state(|| initial);

    {
        let balance = balance.clone();
        use_effect_with(initial, move |initial| {
            if initial.is_some() {
                balance.set(*initial);
            }
            || ()
        });
    }

    {
        let balance = balance.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, BALANCE_UPDATE_EVENT, move |event| {
                    let detail = event
                        .dyn_ref::<CustomEvent>()
                        .and_then(|e| e.detail().as_f64());
                    if let Some(amount) = detail {
                        balance.set(Some(amount));
                    }
                })
            });
            move || drop(listener)
        });
    }

    balance
}
