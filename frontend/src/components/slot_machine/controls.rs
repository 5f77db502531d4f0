use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::bet::BetLimits;
use shared::slot_controller::SlotCommand;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub bet: String,
    pub limits: BetLimits,
    pub spinning: bool,
    pub auto_spinning: bool,
    pub on_command: Callback<SlotCommand>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let send = |command: SlotCommand| {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| on_command.emit(command.clone()))
    };

    let on_bet = {
        let on_command = props.on_command.clone();
        let limits = props.limits;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let normalized = limits.normalize(&input.value());
            input.set_value(&normalized);
            on_command.emit(SlotCommand::SetBet(normalized));
        })
    };

    let auto_label = if props.auto_spinning { "Stop Auto" } else { "Auto Spin" };

    html! {
        <div class={styles::SLOT_CONTROLS}>
            <button class={styles::BUTTON_SECONDARY} disabled={props.spinning} onclick={send(SlotCommand::BetDown)}>{"-"}</button>
            <input
                type="number"
                class={styles::SLOT_BET_INPUT}
                value={props.bet.clone()}
                disabled={props.spinning}
                onchange={on_bet}
            />
            <button class={styles::BUTTON_SECONDARY} disabled={props.spinning} onclick={send(SlotCommand::BetUp)}>{"+"}</button>
            <button class={styles::BUTTON_PRIMARY} disabled={props.spinning} onclick={send(SlotCommand::Spin)}>
                { if props.spinning { "Spinning..." } else { "Spin" } }
            </button>
            <button class={styles::BUTTON_SECONDARY} disabled={props.spinning} onclick={send(SlotCommand::ToggleAutoSpin)}>{auto_label}</button>
            <button class={styles::BUTTON_SECONDARY} disabled={props.spinning} onclick={send(SlotCommand::Reset)}>{"Reset"}</button>
        </div>
    }
}
