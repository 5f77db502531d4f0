use std::rc::Rc;

use shared::api::{PlayRequest, PlayResponse};
use shared::constants::WIN_POPUP_MS;
use shared::play::{payout_label, round_message, server_outcome, shows_win_popup};
use shared::slot_controller::SlotController;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{dispatch_balance_event, use_app};
use crate::api::post_json;

#[derive(Clone)]
pub struct PlayHandle {
    /// `(game id, amount)`: one server round.
    pub play: Callback<(i64, f64)>,
    /// Local spin of the slot at the given bet, no server call.
    pub demo: Callback<f64>,
    pub busy: bool,
    /// Win amount while the win popup is up.
    pub popup: Option<f64>,
    /// Server-settled payout of the last played round.
    pub payout: Option<String>,
}

fn play_path(game_id: i64) -> String {
    format!("/games/{}/play", game_id)
}

#[hook]
pub fn use_play(slot: Rc<SlotController>, on_round: Callback<()>) -> PlayHandle {
    let app = use_app();
    let busy = use_state(|| false);
    let popup = use_state(|| None::<f64>);
    let payout = use_state(|| None::<String>);

    let play = {
        let app = app.clone();
        let busy = busy.clone();
        let popup = popup.clone();
        let payout = payout.clone();
        let slot = Rc::clone(&slot);
        Callback::from(move |(game_id, amount): (i64, f64)| {
            if *busy {
                return;
            }
            busy.set(true);

            let app = app.clone();
            let busy = busy.clone();
            let popup = popup.clone();
            let payout = payout.clone();
            let slot = Rc::clone(&slot);
            let on_round = on_round.clone();
            spawn_local(async move {
                let request = PlayRequest { amount };
                match post_json::<_, PlayResponse>(&play_path(game_id), &request, false).await {
                    Ok(round) => {
                        app.alerts.success(round_message(&round));
                        payout.set(Some(payout_label(&round)));
                        if let Some(balance) = round.new_balance {
                            dispatch_balance_event(balance);
                        }
                        if shows_win_popup(&round) {
                            popup.set(Some(round.win_amount));
                            let popup = popup.clone();
                            app.scheduler.schedule(WIN_POPUP_MS, Box::new(move || popup.set(None)));
                        }
                        if let Some(outcome) = server_outcome(&round) {
                            slot.machine().borrow_mut().set_bet(amount);
                            if slot.spin(Some(outcome)).is_none() {
                                log::warn!("slot still spinning, server outcome not animated");
                            }
                        }
                        on_round.emit(());
                    }
                    Err(err) => {
                        app.alerts.error(err.user_message());
                    }
                }
                busy.set(false);
            });
        })
    };

    let demo = {
        let slot = Rc::clone(&slot);
        Callback::from(move |amount: f64| {
            slot.machine().borrow_mut().set_bet(amount);
            if slot.spin(None).is_none() {
                log::warn!("demo spin ignored, reels still moving");
            }
        })
    };

    PlayHandle {
        play,
        demo,
        busy: *busy,
        popup: *popup,
        payout: (*payout).clone(),
    }
}
