use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::constants::ALERT_DISMISS_MS;
use crate::scheduler::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
    Warning,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
}

/// Visible alerts, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertQueue {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, kind: AlertKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.insert(0, Alert { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// One alert queue for the whole app, with timed dismissal through the scheduler.
pub struct AlertCenter {
    queue: RefCell<AlertQueue>,
    scheduler: Rc<dyn Scheduler>,
    on_change: RefCell<Option<Rc<dyn Fn()>>>,
    this: Weak<AlertCenter>,
}

impl AlertCenter {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            queue: RefCell::new(AlertQueue::default()),
            scheduler,
            on_change: RefCell::new(None),
            this: this.clone(),
        })
    }

    pub fn set_on_change(&self, callback: Option<Rc<dyn Fn()>>) {
        *self.on_change.borrow_mut() = callback;
    }

    fn changed(&self) {
        let callback = self.on_change.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.queue.borrow().alerts().to_vec()
    }

    pub fn show(&self, kind: AlertKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        debug!("alert [{}]: {}", kind.as_str(), message);
        let id = self.queue.borrow_mut().push(kind, message);

        let this = self.this.clone();
        self.scheduler.schedule(
            ALERT_DISMISS_MS,
            Box::new(move || {
                if let Some(center) = this.upgrade() {
                    center.dismiss(id);
                }
            }),
        );
        self.changed();
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(AlertKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(AlertKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(AlertKind::Info, message)
    }

    pub fn dismiss(&self, id: u64) {
        let removed = self.queue.borrow_mut().dismiss(id);
        if removed {
            self.changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::Cell;

    #[test]
    fn newest_first_and_manual_dismiss() {
        let mut queue = AlertQueue::default();
        let first = queue.push(AlertKind::Info, "one");
        let second = queue.push(AlertKind::Error, "two");
        assert_eq!(queue.alerts()[0].id, second);
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn alerts_dismiss_themselves_after_timeout() {
        let scheduler = Rc::new(ManualScheduler::new());
        let center = AlertCenter::new(scheduler.clone());
        let changes = Rc::new(Cell::new(0));
        let c = changes.clone();
        center.set_on_change(Some(Rc::new(move || c.set(c.get() + 1))));

        center.success("saved");
        scheduler.advance(2000);
        center.error("failed");
        assert_eq!(center.alerts().len(), 2);
        assert_eq!(center.alerts()[0].kind, AlertKind::Error);

        scheduler.advance(3000);
        let left = center.alerts();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].message, "failed");

        scheduler.advance(2000);
        assert!(center.alerts().is_empty());
        assert_eq!(changes.get(), 4);
    }

    #[test]
    fn manual_dismiss_before_timeout() {
        let scheduler = Rc::new(ManualScheduler::new());
        let center = AlertCenter::new(scheduler.clone());
        let id = center.info("hello");
        center.dismiss(id);
        assert!(center.alerts().is_empty());
        scheduler.advance(ALERT_DISMISS_MS as u64);
        assert!(center.alerts().is_empty());
    }
}
