use shared::api::GameInfo;
use shared::bet::format_bet;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

/// Everything a catalog card can ask its page to do.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogCommand {
    Play { game_id: i64 },
    Demo { game_id: i64 },
    SetBet { game_id: i64, input: String },
}

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: GameInfo,
    pub bet: String,
    #[prop_or(false)]
    pub busy: bool,
    pub on_command: Callback<CatalogCommand>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = &props.game;
    let game_id = game.id;

    let on_bet = {
        let on_command = props.on_command.clone();
        let limits = game.bet_limits();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // the stored bet may not change, so the field is rewritten directly
            let normalized = limits.normalize(&input.value());
            input.set_value(&normalized);
            on_command.emit(CatalogCommand::SetBet { game_id, input: normalized });
        })
    };
    let on_play = {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| on_command.emit(CatalogCommand::Play { game_id }))
    };
    let on_demo = {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| on_command.emit(CatalogCommand::Demo { game_id }))
    };

    html! {
        <div class={styles::CARD_HOVER}>
            <img
                src={game.image_or_placeholder().to_string()}
                alt={game.title.clone()}
                class="w-full h-40 object-cover rounded-md mb-4"
            />
            <h3 class={styles::TEXT_H3}>{&game.title}</h3>
            <div class={classes!(styles::TEXT_SMALL, "flex", "justify-between", "mt-1")}>
                <span>{format!("RTP: {}%", game.rtp)}</span>
                <span>{format!("Bet: ${} - ${}", format_bet(game.min_bet), format_bet(game.max_bet))}</span>
            </div>
            <p class={classes!(styles::TEXT_SECONDARY, "mt-2")}>{game.description_or_default()}</p>
            <div class="mt-4 flex items-center gap-2">
                <input
                    type="number"
                    class={classes!(styles::INPUT, "mt-0")}
                    placeholder="Bet amount"
                    min={format_bet(game.min_bet)}
                    max={format_bet(game.max_bet)}
                    value={props.bet.clone()}
                    onchange={on_bet}
                />
                <button class={styles::BUTTON_PRIMARY} disabled={props.busy} onclick={on_play}>{"Play Now"}</button>
                if game.is_slot() {
                    <button class={styles::BUTTON_SECONDARY} onclick={on_demo}>{"Demo"}</button>
                }
            </div>
        </div>
    }
}
