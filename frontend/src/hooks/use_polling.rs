use yew::prelude::*;

use super::use_app;

/// Runs `fetch` on mount and then every `period_ms` until unmount. No backoff
/// and no overlap protection: a slow request can still be in flight when the
/// next one starts.
#[hook]
pub fn use_polling(period_ms: u32, fetch: Callback<()>) {
    let scheduler = use_app().scheduler;

    use_effect_with(period_ms, move |period_ms| {
        fetch.emit(());
        let tick = fetch.clone();
        let handle = scheduler.schedule_repeating(*period_ms, Box::new(move || tick.emit(())));
        move || scheduler.cancel(handle)
    });
}
