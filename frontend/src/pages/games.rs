use std::collections::HashMap;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::api::{format_timestamp, BetRecord, GameHistory, GameInfo, GamesResponse, RoundResult};
use shared::bet::{format_bet, format_money};
use shared::constants::{GAMES_AVAILABLE_ENDPOINT, GAMES_HISTORY_ENDPOINT, NO_GAMES_PLAYED};

use crate::api::get_json;
use crate::base::Base;
use crate::components::{use_slot_controller, CatalogCommand, GameCard, SlotMachineView, WinPopup};
use crate::hooks::{use_alerts, use_play};
use crate::styles;

fn result_badge(result: RoundResult) -> &'static str {
    match result {
        RoundResult::Win => styles::BADGE_SUCCESS,
        RoundResult::Loss => styles::BADGE_DANGER,
        RoundResult::Other => styles::BADGE_WARNING,
    }
}

fn history_row(bet: &BetRecord) -> Html {
    html! {
        <tr key={bet.id}>
            <td class={styles::TABLE_CELL}>{format_timestamp(&bet.timestamp)}</td>
            <td class={styles::TABLE_CELL}>{&bet.game_title}</td>
            <td class={styles::TABLE_CELL}>{format_money(bet.amount)}</td>
            <td class={styles::TABLE_CELL}>{format!("x{:.2}", bet.multiplier)}</td>
            <td class={styles::TABLE_CELL}>
                <span class={result_badge(bet.result)}>{bet.result.label().to_uppercase()}</span>
            </td>
            <td class={styles::TABLE_CELL}>{format_money(bet.win_amount)}</td>
        </tr>
    }
}

#[function_component(Games)]
pub fn games() -> Html {
    let alerts = use_alerts();
    let catalog = use_state(Vec::<GameInfo>::new);
    let bets = use_state(HashMap::<i64, String>::new);
    let history = use_state(|| None::<GameHistory>);
    let slot = use_slot_controller();

    let load_history = {
        let history = history.clone();
        Callback::from(move |_: ()| {
            let history = history.clone();
            spawn_local(async move {
                // Guests get a 401 here; the catalog still renders.
                match get_json::<GameHistory>(GAMES_HISTORY_ENDPOINT).await {
                    Ok(loaded) => history.set(Some(loaded)),
                    Err(err) => log::warn!("history unavailable: {}", err),
                }
            });
        })
    };

    let play = use_play(slot.0.clone(), load_history.clone());

    {
        let catalog = catalog.clone();
        let bets = bets.clone();
        let alerts = alerts.clone();
        let load_history = load_history.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match get_json::<GamesResponse>(GAMES_AVAILABLE_ENDPOINT).await {
                    Ok(response) => {
                        log::info!("loaded {} games", response.games.len());
                        let defaults = response
                            .games
                            .iter()
                            .map(|g| (g.id, format_bet(g.min_bet)))
                            .collect::<HashMap<_, _>>();
                        bets.set(defaults);
                        catalog.set(response.games);
                    }
                    Err(err) => {
                        alerts.error(err.user_message());
                    }
                }
            });
            load_history.emit(());
            || ()
        });
    }

    let on_command = {
        let catalog = catalog.clone();
        let bets = bets.clone();
        let play = play.clone();
        Callback::from(move |command: CatalogCommand| {
            let game_id = match &command {
                CatalogCommand::Play { game_id }
                | CatalogCommand::Demo { game_id }
                | CatalogCommand::SetBet { game_id, .. } => *game_id,
            };
            let Some(game) = catalog.iter().find(|g| g.id == game_id) else {
                log::warn!("command for unknown game {}", game_id);
                return;
            };
            let limits = game.bet_limits();
            let current = bets.get(&game_id).map(String::as_str).unwrap_or_default();

            match command {
                CatalogCommand::SetBet { input, .. } => {
                    let mut next = (*bets).clone();
                    next.insert(game_id, format_bet(limits.clamp(&input)));
                    bets.set(next);
                }
                CatalogCommand::Play { .. } => play.play.emit((game_id, limits.clamp(current))),
                CatalogCommand::Demo { .. } => play.demo.emit(limits.clamp(current)),
            }
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <h1 class={classes!(styles::TEXT_H2, "mb-6")}>{"Games"}</h1>
                <div class={styles::GAME_GRID}>
                    { for catalog.iter().map(|game| html! {
                        <GameCard
                            key={game.id}
                            game={game.clone()}
                            bet={bets.get(&game.id).cloned().unwrap_or_else(|| format_bet(game.min_bet))}
                            busy={play.busy}
                            on_command={on_command.clone()}
                        />
                    }) }
                </div>

                <div class="mt-10 max-w-3xl mx-auto">
                    <SlotMachineView slot={slot.clone()} />
                    if let Some(payout) = &play.payout {
                        <p class={classes!(styles::TEXT_SECONDARY, "mt-2", "text-center")}>{payout.clone()}</p>
                    }
                </div>

                <div class={classes!(styles::CARD, "mt-10")}>
                    <h2 class={classes!(styles::TEXT_H3, "mb-4")}>{"Game History"}</h2>
                    {
                        match &*history {
                            Some(h) if !h.bets.is_empty() => html! {
                                <table class={styles::TABLE}>
                                    <thead>
                                        <tr>
                                            <th class={styles::TABLE_HEAD}>{"Date"}</th>
                                            <th class={styles::TABLE_HEAD}>{"Game"}</th>
                                            <th class={styles::TABLE_HEAD}>{"Bet"}</th>
                                            <th class={styles::TABLE_HEAD}>{"Multiplier"}</th>
                                            <th class={styles::TABLE_HEAD}>{"Result"}</th>
                                            <th class={styles::TABLE_HEAD}>{"Win"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>{ for h.bets.iter().map(history_row) }</tbody>
                                </table>
                            },
                            _ => html! { <p class={styles::TEXT_SECONDARY}>{NO_GAMES_PLAYED}</p> },
                        }
                    }
                </div>
            </div>
            <WinPopup amount={play.popup} />
        </Base>
    }
}
