use yew::prelude::*;
use shared::reel::ReelPhase;
use shared::symbols::Symbol;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ReelViewProps {
    pub symbols: Vec<Symbol>,
    pub phase: ReelPhase,
    pub payline_row: usize,
    #[prop_or_default]
    pub highlights: Vec<bool>,
}

#[function_component(ReelView)]
pub fn reel_view(props: &ReelViewProps) -> Html {
    let phase_class = match props.phase {
        ReelPhase::Idle => None,
        ReelPhase::Spinning => Some(styles::SLOT_REEL_SPINNING),
        ReelPhase::Stopping => Some(styles::SLOT_REEL_STOPPING),
    };

    html! {
        <div class={classes!(styles::SLOT_REEL, phase_class)}>
            { for props.symbols.iter().enumerate().map(|(row, symbol)| {
                let payline = (row == props.payline_row).then_some(styles::SLOT_CELL_PAYLINE);
                let winning = props
                    .highlights
                    .get(row)
                    .copied()
                    .unwrap_or(false)
                    .then_some(styles::SLOT_CELL_WIN);
                html! {
                    <div class={classes!(styles::SLOT_CELL, payline, winning)} title={symbol.name()}>
                        {symbol.icon()}
                    </div>
                }
            }) }
        </div>
    }
}
