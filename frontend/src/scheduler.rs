use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::scheduler::{Scheduler, TaskHandle};
use wasm_bindgen_futures::spawn_local;

/// Browser timers. Each task is a local future sleeping on `TimeoutFuture`;
/// cancelling just drops the handle from the live set so the task is skipped
/// when it wakes.
#[derive(Default)]
pub struct GlooScheduler {
    next_id: Cell<u64>,
    live: Rc<RefCell<HashSet<TaskHandle>>>,
}

impl GlooScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&self) -> TaskHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = TaskHandle::new(id);
        self.live.borrow_mut().insert(handle);
        handle
    }
}

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = self.next_handle();
        let live = Rc::clone(&self.live);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let fire = live.borrow_mut().remove(&handle);
            if fire {
                task();
            }
        });
        handle
    }

    fn schedule_repeating(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = self.next_handle();
        let live = Rc::clone(&self.live);
        spawn_local(async move {
            loop {
                TimeoutFuture::new(period_ms.max(1)).await;
                let running = live.borrow().contains(&handle);
                if !running {
                    break;
                }
                task();
            }
        });
        handle
    }

    fn cancel(&self, handle: TaskHandle) {
        self.live.borrow_mut().remove(&handle);
    }
}
