use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Timer source for animation steps, polling and alert dismissal.
///
/// Everything runs on one thread, so tasks are plain boxed closures. A
/// cancelled handle never fires again, including a repeating task cancelled
/// from inside its own callback.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;
    fn cancel(&self, handle: TaskHandle);
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeating { period: u64, task: Box<dyn FnMut()> },
}

#[derive(Default)]
struct Clock {
    now: u64,
    seq: u64,
    next_id: u64,
    queue: BTreeMap<(u64, u64), (TaskHandle, Task)>,
    live: HashSet<TaskHandle>,
}

impl Clock {
    fn push(&mut self, due: u64, handle: TaskHandle, task: Task) {
        self.seq += 1;
        self.queue.insert((due, self.seq), (handle, task));
    }

    fn handle(&mut self) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle(self.next_id);
        self.live.insert(handle);
        handle
    }
}

/// Deterministic virtual clock. Nothing runs until `advance` is called; tasks
/// due at the same instant run in the order they were scheduled.
#[derive(Default)]
pub struct ManualScheduler {
    clock: RefCell<Clock>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Live tasks, repeating ones included.
    pub fn pending(&self) -> usize {
        self.clock.borrow().live.len()
    }

    /// Moves the clock forward, running every task that falls due on the way.
    /// Tasks scheduled while advancing run too if they fall inside the window.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let key = match clock.queue.keys().next() {
                    Some(&key) if key.0 <= target => key,
                    _ => break,
                };
                clock.now = key.0;
                clock.queue.remove(&key).map(|entry| (key.0, entry))
            };
            let Some((due, (handle, task))) = next else { break };

            match task {
                Task::Once(task) => {
                    if self.clock.borrow_mut().live.remove(&handle) {
                        task();
                    }
                }
                Task::Repeating { period, mut task } => {
                    if !self.clock.borrow().live.contains(&handle) {
                        continue;
                    }
                    task();
                    let mut clock = self.clock.borrow_mut();
                    if clock.live.contains(&handle) {
                        clock.push(due + period, handle, Task::Repeating { period, task });
                    }
                }
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let mut clock = self.clock.borrow_mut();
        let handle = clock.handle();
        let due = clock.now + delay_ms as u64;
        clock.push(due, handle, Task::Once(task));
        handle
    }

    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        let mut clock = self.clock.borrow_mut();
        let handle = clock.handle();
        let period = period_ms.max(1) as u64;
        let due = clock.now + period;
        clock.push(due, handle, Task::Repeating { period, task });
        handle
    }

    fn cancel(&self, handle: TaskHandle) {
        if self.clock.borrow_mut().live.remove(&handle) {
            debug!("cancelled task {}", handle.id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_tasks_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let log = log.clone();
            scheduler.schedule(delay, Box::new(move || log.borrow_mut().push(tag)));
        }
        scheduler.advance(15);
        assert_eq!(*log.borrow(), vec!["a", "a2"]);
        scheduler.advance(100);
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(scheduler.now(), 115);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn nested_scheduling_inside_window() {
        let scheduler = Rc::new(ManualScheduler::new());
        let hits = Rc::new(RefCell::new(Vec::new()));
        let inner = scheduler.clone();
        let h = hits.clone();
        scheduler.schedule(10, Box::new(move || {
            h.borrow_mut().push(inner.now());
            let h = h.clone();
            let again = inner.clone();
            inner.schedule(5, Box::new(move || h.borrow_mut().push(again.now())));
        }));
        scheduler.advance(20);
        assert_eq!(*hits.borrow(), vec![10, 15]);
    }

    #[test]
    fn repeating_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let handle = scheduler.schedule_repeating(100, Box::new(move || *c.borrow_mut() += 1));
        scheduler.advance(350);
        assert_eq!(*count.borrow(), 3);
        scheduler.cancel(handle);
        scheduler.advance(1000);
        assert_eq!(*count.borrow(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancelled_once_task_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let f = fired.clone();
        let handle = scheduler.schedule(10, Box::new(move || *f.borrow_mut() = true));
        scheduler.cancel(handle);
        scheduler.advance(50);
        assert!(!*fired.borrow());
    }

    #[test]
    fn repeating_task_can_cancel_itself() {
        let scheduler = Rc::new(ManualScheduler::new());
        let count = Rc::new(RefCell::new(0));
        let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));
        let (c, s, sched) = (count.clone(), slot.clone(), scheduler.clone());
        let handle = scheduler.schedule_repeating(10, Box::new(move || {
            *c.borrow_mut() += 1;
            if *c.borrow() == 2 {
                if let Some(h) = *s.borrow() {
                    sched.cancel(h);
                }
            }
        }));
        *slot.borrow_mut() = Some(handle);
        scheduler.advance(100);
        assert_eq!(*count.borrow(), 2);
    }
}
