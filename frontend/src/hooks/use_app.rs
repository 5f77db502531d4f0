use std::rc::Rc;

use shared::alerts::AlertCenter;
use shared::scheduler::Scheduler;
use yew::prelude::*;

use crate::scheduler::GlooScheduler;

/// App-wide services handed down through Yew context: one timer source and
/// one alert queue.
#[derive(Clone)]
pub struct AppContext {
    pub scheduler: Rc<dyn Scheduler>,
    pub alerts: Rc<AlertCenter>,
}

impl AppContext {
    pub fn new() -> Self {
        let scheduler: Rc<dyn Scheduler> = Rc::new(GlooScheduler::new());
        let alerts = AlertCenter::new(Rc::clone(&scheduler));
        Self { scheduler, alerts }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.alerts, &other.alerts)
    }
}

/// `App` always provides the context; a component mounted outside it gets a
/// private one built on the spot.
#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| {
        log::warn!("no AppContext provider, using a detached one");
        AppContext::new()
    })
}

#[hook]
pub fn use_alerts() -> Rc<AlertCenter> {
    use_app().alerts
}
