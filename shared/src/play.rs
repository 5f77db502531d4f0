use log::warn;

use crate::api::{PlayResponse, RoundResult};
use crate::win_lines::SpinResult;

/// Alert text after a round: `Result: WIN! Win: $25.50`.
pub fn round_message(response: &PlayResponse) -> String {
    format!(
        "Result: {}! Win: ${:.2}",
        response.result.label().to_uppercase(),
        response.win_amount
    )
}

/// Payout the server settled for the round. The slot panel recomputes lines for
/// display only; this is the amount that reached the balance.
pub fn payout_label(response: &PlayResponse) -> String {
    format!("Paid: ${:.2} at bet ${:.2}", response.win_amount, response.bet_amount)
}

pub fn shows_win_popup(response: &PlayResponse) -> bool {
    response.result == RoundResult::Win
}

/// The slot outcome the server sent, if it sent a usable one.
pub fn server_outcome(response: &PlayResponse) -> Option<SpinResult> {
    let reels = response.reels.clone()?;
    match SpinResult::try_from(reels) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            warn!("ignoring server reels: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_response;
    use crate::symbols::Symbol;

    fn response(body: &str) -> PlayResponse {
        decode_response(200, body).unwrap()
    }

    #[test]
    fn message_uppercases_result() {
        let win = response(r#"{"success":true,"result":"win","win_amount":25.5}"#);
        assert_eq!(round_message(&win), "Result: WIN! Win: $25.50");
        assert!(shows_win_popup(&win));

        let loss = response(r#"{"success":true,"result":"loss","win_amount":0}"#);
        assert_eq!(round_message(&loss), "Result: LOSS! Win: $0.00");
        assert!(!shows_win_popup(&loss));
    }

    #[test]
    fn payout_comes_from_the_server_round() {
        let round = response(
            r#"{"result":"win","bet_amount":2,"win_amount":7,"reels":["cherry","cherry","lemon","lemon","orange"]}"#,
        );
        // local lines would pay 10 at bet 2; the server's figure wins
        assert_eq!(payout_label(&round), "Paid: $7.00 at bet $2.00");
    }

    #[test]
    fn outcome_only_when_complete() {
        let full = response(r#"{"result":"win","reels":["bell","bell","bell","bell","bell"]}"#);
        assert_eq!(server_outcome(&full), Some(SpinResult::new([Symbol::Bell; 5])));

        let short = response(r#"{"result":"win","reels":["bell"]}"#);
        assert_eq!(server_outcome(&short), None);

        let none = response(r#"{"result":"loss"}"#);
        assert_eq!(server_outcome(&none), None);
    }
}
