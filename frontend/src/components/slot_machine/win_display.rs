use yew::prelude::*;
use shared::constants::NO_WINNING_LINES;
use shared::win_lines::{SpinSummary, WinLine};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinDisplayProps {
    pub summary: Option<SpinSummary>,
}

fn line_row(line: &WinLine) -> Html {
    let icons: String = line.symbols.iter().map(|s| s.icon()).collect();
    html! {
        <li class="flex justify-between text-sm">
            <span>{format!("Line {}: {} {}", line.line, line.kind.label(), icons)}</span>
            <span class="font-semibold text-amber-300">
                {format!("x{} = ${:.2}", line.multiplier, line.win)}
            </span>
        </li>
    }
}

#[function_component(WinDisplay)]
pub fn win_display(props: &WinDisplayProps) -> Html {
    let Some(summary) = &props.summary else {
        return html! {};
    };

    html! {
        <div class={styles::SLOT_WIN_PANEL}>
            <div class="flex justify-between font-bold text-lg">
                <span>{summary.win_label()}</span>
                <span>{summary.multiplier_label()}</span>
            </div>
            if summary.is_win() {
                <ul class="mt-2 space-y-1">
                    { for summary.win_lines.iter().map(line_row) }
                </ul>
            } else {
                <p class="mt-2 text-sm text-gray-400">{NO_WINNING_LINES}</p>
            }
        </div>
    }
}
