use yew::prelude::*;

use crate::base::Base;
use crate::components::{use_slot_controller, SlotMachineView};
use crate::styles;

/// Free-play slot machine. Every spin is drawn locally; nothing touches the balance.
#[function_component(Slots)]
pub fn slots() -> Html {
    let slot = use_slot_controller();

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="max-w-3xl mx-auto">
                    <SlotMachineView {slot} title="Lucky Slots" />
                    <p class={classes!(styles::TEXT_SMALL, "mt-4", "text-center")}>
                        {"Five of a kind on the payline pays the most. Special patterns pay from four matching reels."}
                    </p>
                </div>
            </div>
        </Base>
    }
}
