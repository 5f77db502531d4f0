use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use log::{debug, warn};

use crate::reel::ReelPhase;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::shared_slot_game::{SlotConfig, SlotMachine};
use crate::win_lines::{SpinResult, SpinSummary};

/// Render hooks. Both are optional; a controller without an observer still
/// spins and resolves its summary.
pub trait SpinObserver {
    fn on_reel_step(&self, _reel: usize) {}
    fn on_spin_complete(&self, _summary: &SpinSummary) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotCommand {
    Spin,
    ToggleAutoSpin,
    Reset,
    BetUp,
    BetDown,
    SetBet(String),
}

struct SpinJoin {
    outcome: SpinResult,
    bet: f64,
    remaining: Cell<usize>,
    reply: RefCell<Option<oneshot::Sender<SpinSummary>>>,
}

/// Drives a `SlotMachine` through the reel animation on a `Scheduler`.
pub struct SlotController {
    machine: Rc<RefCell<SlotMachine>>,
    scheduler: Rc<dyn Scheduler>,
    observer: RefCell<Option<Rc<dyn SpinObserver>>>,
    auto_spin: Cell<Option<TaskHandle>>,
}

impl SlotController {
    pub fn new(machine: SlotMachine, scheduler: Rc<dyn Scheduler>) -> Rc<Self> {
        Rc::new(Self {
            machine: Rc::new(RefCell::new(machine)),
            scheduler,
            observer: RefCell::new(None),
            auto_spin: Cell::new(None),
        })
    }

    pub fn machine(&self) -> Rc<RefCell<SlotMachine>> {
        Rc::clone(&self.machine)
    }

    pub fn set_observer(&self, observer: Option<Rc<dyn SpinObserver>>) {
        *self.observer.borrow_mut() = observer;
    }

    pub fn is_spinning(&self) -> bool {
        self.machine.borrow().is_spinning()
    }

    pub fn is_auto_spinning(&self) -> bool {
        self.auto_spin.get().is_some()
    }

    fn config(&self) -> SlotConfig {
        self.machine.borrow().config().clone()
    }

    fn observer(&self) -> Option<Rc<dyn SpinObserver>> {
        self.observer.borrow().clone()
    }

    fn notify_step(&self, reel: usize) {
        if let Some(observer) = self.observer() {
            observer.on_reel_step(reel);
        }
    }

    /// Starts a spin, with the given outcome or a weighted random one. Returns
    /// `None` if a spin is already running; the receiver resolves once every
    /// reel has settled and the win lines are in.
    pub fn spin(self: &Rc<Self>, outcome: Option<SpinResult>) -> Option<oneshot::Receiver<SpinSummary>> {
        let plan = self.machine.borrow_mut().begin_spin(outcome)?;
        let config = self.config();
        let (tx, rx) = oneshot::channel();
        let join = Rc::new(SpinJoin {
            outcome: plan.outcome,
            bet: plan.bet,
            remaining: Cell::new(plan.fast_spins.len()),
            reply: RefCell::new(Some(tx)),
        });

        for (reel, &fast_spins) in plan.fast_spins.iter().enumerate() {
            let this = Rc::clone(self);
            let join = Rc::clone(&join);
            let delay = reel as u32 * config.reel_stagger_ms;
            self.scheduler.schedule(
                delay,
                Box::new(move || this.fast_step(reel, fast_spins, join)),
            );
        }
        self.notify_step(0);
        Some(rx)
    }

    fn fast_step(self: Rc<Self>, reel: usize, left: u32, join: Rc<SpinJoin>) {
        self.machine.borrow_mut().shift_reel(reel);
        self.notify_step(reel);

        let config = self.config();
        let this = Rc::clone(&self);
        if left > 1 {
            self.scheduler.schedule(
                config.frame_ms,
                Box::new(move || this.fast_step(reel, left - 1, join)),
            );
        } else {
            self.scheduler.schedule(
                config.slow_start_ms + config.slow_step_ms,
                Box::new(move || this.slow_step(reel, 1, join)),
            );
        }
    }

    fn slow_step(self: Rc<Self>, reel: usize, step: u32, join: Rc<SpinJoin>) {
        self.machine.borrow_mut().shift_reel(reel);
        let config = self.config();

        if step < config.slow_spins {
            self.notify_step(reel);
            let this = Rc::clone(&self);
            self.scheduler.schedule(
                config.slow_step_ms,
                Box::new(move || this.slow_step(reel, step + 1, join)),
            );
            return;
        }

        self.machine.borrow_mut().settle_reel(reel, join.outcome[reel]);
        self.notify_step(reel);

        let this = Rc::clone(&self);
        self.scheduler.schedule(
            config.stop_bounce_ms,
            Box::new(move || {
                this.machine.borrow_mut().set_reel_phase(reel, ReelPhase::Idle);
                this.notify_step(reel);
            }),
        );

        let remaining = join.remaining.get().saturating_sub(1);
        join.remaining.set(remaining);
        debug!("reel {} settled, {} still moving", reel, remaining);
        if remaining == 0 {
            let this = Rc::clone(&self);
            self.scheduler.schedule(
                config.settle_pause_ms,
                Box::new(move || this.finish(join)),
            );
        }
    }

    fn finish(&self, join: Rc<SpinJoin>) {
        let summary = self.machine.borrow_mut().finish_spin(join.outcome, join.bet);
        if let Some(observer) = self.observer() {
            observer.on_spin_complete(&summary);
        }
        if let Some(reply) = join.reply.borrow_mut().take() {
            // receiver may be gone; the result is already on the machine
            let _ = reply.send(summary);
        }
    }

    /// Starts or stops auto spin. Returns whether it is now running.
    pub fn toggle_auto_spin(self: &Rc<Self>) -> bool {
        if let Some(handle) = self.auto_spin.take() {
            self.scheduler.cancel(handle);
            debug!("auto spin stopped");
            return false;
        }
        let weak = Rc::downgrade(self);
        let period = self.machine.borrow().config().auto_spin_interval_ms;
        let handle = self.scheduler.schedule_repeating(
            period,
            Box::new(move || {
                if let Some(this) = weak.upgrade() {
                    if !this.is_spinning() {
                        let _ = this.spin(None);
                    }
                }
            }),
        );
        self.auto_spin.set(Some(handle));
        debug!("auto spin started every {}ms", period);
        true
    }

    pub fn reset(&self) -> bool {
        let done = self.machine.borrow_mut().reset();
        if done {
            self.notify_step(0);
        }
        done
    }

    pub fn dispatch(self: &Rc<Self>, command: SlotCommand) {
        match command {
            SlotCommand::Spin => {
                if self.spin(None).is_none() {
                    warn!("spin ignored, reels still moving");
                }
            }
            SlotCommand::ToggleAutoSpin => {
                self.toggle_auto_spin();
            }
            SlotCommand::Reset => {
                self.reset();
            }
            SlotCommand::BetUp => {
                self.machine.borrow_mut().bet_up();
            }
            SlotCommand::BetDown => {
                self.machine.borrow_mut().bet_down();
            }
            SlotCommand::SetBet(input) => {
                self.machine.borrow_mut().set_bet_input(&input);
            }
        }
        self.notify_step(0);
    }
}

impl Drop for SlotController {
    fn drop(&mut self) {
        if let Some(handle) = self.auto_spin.take() {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::symbols::Symbol::*;

    #[derive(Default)]
    struct Recorder {
        steps: RefCell<Vec<usize>>,
        completions: Cell<usize>,
    }

    impl SpinObserver for Recorder {
        fn on_reel_step(&self, reel: usize) {
            self.steps.borrow_mut().push(reel);
        }

        fn on_spin_complete(&self, _summary: &SpinSummary) {
            self.completions.set(self.completions.get() + 1);
        }
    }

    fn setup_with(config: SlotConfig) -> (Rc<ManualScheduler>, Rc<SlotController>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let machine = SlotMachine::with_seed(config, 9);
        let controller = SlotController::new(machine, scheduler.clone());
        (scheduler, controller)
    }

    fn setup() -> (Rc<ManualScheduler>, Rc<SlotController>) {
        setup_with(SlotConfig::default())
    }

    // longest possible spin: last reel start + 24 frames + slow phase + pause
    const FULL_SPIN_MS: u64 = 4 * 150 + 24 * 16 + 100 + 3 * 150 + 500 + 50;

    #[test]
    fn injected_outcome_lands_and_resolves() {
        let (scheduler, controller) = setup();
        let outcome = SpinResult::new([Diamond; 5]);
        controller.machine().borrow_mut().set_bet_input("2");
        let mut rx = controller.spin(Some(outcome)).unwrap();

        scheduler.advance(FULL_SPIN_MS);
        let summary = rx.try_recv().unwrap().unwrap();
        assert_eq!(summary.total_win, 2660.0);

        let machine = controller.machine();
        let machine = machine.borrow();
        assert!(!machine.is_spinning());
        assert!(machine.reels().iter().all(|r| r.payline_symbol() == Diamond));
        assert!(machine.reels().iter().all(|r| r.phase() == ReelPhase::Idle));
        assert!(machine.reels().iter().all(|r| r.len() == 7));
    }

    #[test]
    fn spin_while_spinning_is_a_noop() {
        let (scheduler, controller) = setup();
        let _rx = controller.spin(Some(SpinResult::new([Cherry, Cherry, Lemon, Lemon, Orange]))).unwrap();
        scheduler.advance(200);
        let before = controller.machine().borrow().reels().to_vec();
        assert!(controller.spin(None).is_none());
        assert_eq!(controller.machine().borrow().reels(), &before[..]);
        assert!(controller.machine().borrow().win_lines().is_empty());
    }

    #[test]
    fn flag_holds_until_every_reel_settles_and_completion_fires_once() {
        let (scheduler, controller) = setup();
        let recorder = Rc::new(Recorder::default());
        controller.set_observer(Some(recorder.clone()));
        let _rx = controller.spin(None).unwrap();

        // earliest the last reel can settle: 600 + 15 frames + slow phase
        scheduler.advance(4 * 150 + 14 * 16 + 100 + 3 * 150 - 1);
        assert!(controller.is_spinning());
        assert_eq!(recorder.completions.get(), 0);

        scheduler.advance(FULL_SPIN_MS);
        assert!(!controller.is_spinning());
        assert_eq!(recorder.completions.get(), 1);
        assert!(recorder.steps.borrow().len() > 5 * 18);
    }

    #[test]
    fn reels_settle_in_stagger_order() {
        let config = SlotConfig { fast_spins_jitter: 0, ..SlotConfig::default() };
        let (scheduler, controller) = setup_with(config);
        let outcome = SpinResult::new([Crown; 5]);

        let _rx = controller.spin(Some(outcome)).unwrap();
        // first reel: 15 frames then slow phase
        let first_settle = 14 * 16 + 100 + 3 * 150;
        scheduler.advance(first_settle);
        let phases: Vec<_> = controller.machine().borrow().reels().iter().map(|r| r.phase()).collect();
        assert_eq!(phases[0], ReelPhase::Stopping);
        assert!(phases[1..].iter().all(|p| *p == ReelPhase::Spinning));

        scheduler.advance(150);
        let phases: Vec<_> = controller.machine().borrow().reels().iter().map(|r| r.phase()).collect();
        assert_eq!(phases[1], ReelPhase::Stopping);
        assert_eq!(phases[2], ReelPhase::Spinning);

        scheduler.advance(300);
        assert_eq!(controller.machine().borrow().reels()[0].phase(), ReelPhase::Idle);
    }

    #[test]
    fn exact_bet_outside_slot_limits_is_kept() {
        let outcome = SpinResult::new([Cherry, Cherry, Lemon, Lemon, Orange]);
        for (bet, expected) in [(0.5, 2.5), (2500.0, 12500.0)] {
            let (scheduler, controller) = setup();
            controller.machine().borrow_mut().set_bet(bet);
            let mut rx = controller.spin(Some(outcome)).unwrap();
            scheduler.advance(FULL_SPIN_MS);
            let summary = rx.try_recv().unwrap().unwrap();
            assert_eq!(summary.bet, bet);
            assert_eq!(summary.total_win, expected);
        }
    }

    #[test]
    fn spins_without_observer() {
        let (scheduler, controller) = setup();
        let mut rx = controller.spin(None).unwrap();
        scheduler.advance(FULL_SPIN_MS);
        assert!(rx.try_recv().unwrap().is_some());
    }

    #[test]
    fn auto_spin_cadence() {
        let (scheduler, controller) = setup();
        let recorder = Rc::new(Recorder::default());
        controller.set_observer(Some(recorder.clone()));

        assert!(controller.toggle_auto_spin());
        assert!(controller.is_auto_spinning());
        scheduler.advance(2999);
        assert!(!controller.is_spinning());
        scheduler.advance(1);
        assert!(controller.is_spinning());

        scheduler.advance(3000 * 3);
        assert_eq!(recorder.completions.get(), 3);

        assert!(!controller.toggle_auto_spin());
        scheduler.advance(10_000);
        assert_eq!(recorder.completions.get(), 4);
        assert!(!controller.is_spinning());
    }

    #[test]
    fn commands_drive_bet_and_reset() {
        let (scheduler, controller) = setup();
        controller.dispatch(SlotCommand::SetBet("15".into()));
        controller.dispatch(SlotCommand::BetUp);
        controller.dispatch(SlotCommand::BetUp);
        controller.dispatch(SlotCommand::BetDown);
        assert_eq!(controller.machine().borrow().bet(), 16.0);

        controller.dispatch(SlotCommand::Spin);
        assert!(controller.is_spinning());
        controller.dispatch(SlotCommand::Reset);
        assert!(controller.is_spinning());

        scheduler.advance(FULL_SPIN_MS);
        assert!(controller.machine().borrow().last_result().is_some());
        controller.dispatch(SlotCommand::Reset);
        assert!(controller.machine().borrow().last_result().is_none());
    }
}
