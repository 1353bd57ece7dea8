use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Timer seam for components that do work on a clock.
///
/// `every` hands back a handle that cancels the repeating task when dropped.
/// `after` cannot be cancelled: the callback runs once the delay has passed,
/// so anything that touches component state must check it is still mounted.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn after(&self, delay_ms: u32, done: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms.max(1), tick)
    }

    fn after(&self, delay_ms: u32, done: Box<dyn FnOnce()>) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            done();
        });
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    enum Work {
        Every(u64, Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Task {
        id: u64,
        due: u64,
        work: Work,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
        // Repeating tasks cancelled while their callback was running.
        cancelled: HashSet<u64>,
    }

    /// Virtual clock. Nothing fires until `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                let mut clock = clock.borrow_mut();
                if let Some(pos) = clock.tasks.iter().position(|t| t.id == self.id) {
                    clock.tasks.remove(pos);
                } else {
                    clock.cancelled.insert(self.id);
                }
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        fn push(&self, delay: u64, work: Work) -> u64 {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(Task { id, due, work });
            id
        }

        /// Moves the clock forward, firing due tasks in schedule order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let clock = self.clock.borrow();
                    clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i)
                };
                let Some(index) = next else { break };

                let Task { id, due, work } = {
                    let mut clock = self.clock.borrow_mut();
                    let task = clock.tasks.remove(index);
                    clock.now = task.due;
                    task
                };

                match work {
                    Work::Every(period, mut tick) => {
                        tick();
                        let mut clock = self.clock.borrow_mut();
                        if !clock.cancelled.remove(&id) {
                            clock.tasks.push(Task {
                                id,
                                due: due + period,
                                work: Work::Every(period, tick),
                            });
                        }
                    }
                    Work::Once(done) => done(),
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let period = u64::from(period_ms.max(1));
            let id = self.push(period, Work::Every(period, tick));
            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }

        fn after(&self, delay_ms: u32, done: Box<dyn FnOnce()>) {
            self.push(u64::from(delay_ms), Work::Once(done));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::Scheduler;

    #[test]
    fn repeating_task_fires_once_per_period() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let _handle = scheduler.every(100, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(99);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
        scheduler.advance(250);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let handle = scheduler.every(10, Box::new(move || counter.set(counter.get() + 1)));
        scheduler.advance(10);
        drop(handle);
        scheduler.advance(100);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn one_shot_runs_once_after_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let flag = fired.clone();
        scheduler.after(50, Box::new(move || flag.set(flag.get() + 1)));
        scheduler.advance(49);
        assert_eq!(fired.get(), 0);
        scheduler.advance(500);
        assert_eq!(fired.get(), 1);
        assert_eq!(scheduler.now(), 549);
    }
}
