mod controls;
mod reel_view;
mod win_display;

use std::rc::Rc;

use yew::prelude::*;
use shared::shared_slot_game::{SlotConfig, SlotMachine};
use shared::slot_controller::{SlotCommand, SlotController, SpinObserver};
use shared::win_lines::SpinSummary;

use crate::hooks::use_app;
use crate::styles;

pub use controls::Controls;
pub use reel_view::ReelView;
pub use win_display::WinDisplay;

/// Shared handle to a page's slot controller. Compared by identity so props
/// holding it only change when the controller itself is replaced.
#[derive(Clone)]
pub struct SlotHandle(pub Rc<SlotController>);

impl PartialEq for SlotHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// One controller per component, alive for as long as the component is.
#[hook]
pub fn use_slot_controller() -> SlotHandle {
    let app = use_app();
    let handle = use_state(move || {
        let machine = SlotMachine::new(SlotConfig::default());
        SlotHandle(SlotController::new(machine, app.scheduler.clone()))
    });

    {
        let controller = Rc::clone(&handle.0);
        use_effect_with((), move |_| {
            move || {
                if controller.is_auto_spinning() {
                    controller.toggle_auto_spin();
                }
                controller.set_observer(None);
            }
        });
    }

    (*handle).clone()
}

struct ViewObserver {
    redraw: UseForceUpdateHandle,
    summary: UseStateHandle<Option<SpinSummary>>,
}

impl SpinObserver for ViewObserver {
    fn on_reel_step(&self, _reel: usize) {
        self.redraw.force_update();
    }

    fn on_spin_complete(&self, summary: &SpinSummary) {
        self.summary.set(Some(summary.clone()));
    }
}

#[derive(Properties, PartialEq)]
pub struct SlotMachineViewProps {
    pub slot: SlotHandle,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(SlotMachineView)]
pub fn slot_machine_view(props: &SlotMachineViewProps) -> Html {
    let redraw = use_force_update();
    let summary = use_state(|| None::<SpinSummary>);

    {
        let redraw = redraw.clone();
        let summary = summary.clone();
        use_effect_with(props.slot.clone(), move |slot| {
            let controller = Rc::clone(&slot.0);
            controller.set_observer(Some(Rc::new(ViewObserver { redraw, summary })));
            move || controller.set_observer(None)
        });
    }

    let on_command = {
        let controller = Rc::clone(&props.slot.0);
        let summary = summary.clone();
        Callback::from(move |command: SlotCommand| {
            if command == SlotCommand::Reset && !controller.is_spinning() {
                summary.set(None);
            }
            controller.dispatch(command);
        })
    };

    let controller = &props.slot.0;
    let machine = controller.machine();
    let machine = machine.borrow();
    let highlights = machine.highlights();

    html! {
        <div class={styles::SLOT_CABINET}>
            if let Some(title) = &props.title {
                <h2 class="mb-4 text-center text-3xl font-extrabold text-amber-300">{title.clone()}</h2>
            }
            <div class={styles::SLOT_REELS}>
                { for machine.reels().iter().enumerate().map(|(i, reel)| html! {
                    <ReelView
                        key={i}
                        symbols={reel.visible().to_vec()}
                        phase={reel.phase()}
                        payline_row={reel.payline_row()}
                        highlights={highlights.get(i).cloned().unwrap_or_default()}
                    />
                }) }
                <div class="pointer-events-none absolute inset-x-3 top-1/2 h-0.5 -translate-y-1/2 bg-red-500/70" />
            </div>
            <Controls
                bet={machine.bet_label()}
                limits={machine.config().bet}
                spinning={machine.is_spinning()}
                auto_spinning={controller.is_auto_spinning()}
                {on_command}
            />
            <WinDisplay summary={(*summary).clone()} />
        </div>
    }
}
