use crate::utils::scheduler::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(u32, Box<dyn FnMut()>),
}

struct Entry {
    id: u64,
    due: u64,
    task: Task,
}

#[derive(Default)]
struct Inner {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
    cancelled: HashSet<u64>,
}

/// Virtual-time scheduler; nothing fires until `advance` is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let position = inner
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                position.map(|index| {
                    let entry = inner.entries.remove(index);
                    inner.now = entry.due;
                    entry
                })
            };
            let Some(entry) = next else { break };
            match entry.task {
                Task::Once(task) => task(),
                Task::Repeat(period, mut task) => {
                    task();
                    let mut inner = self.inner.borrow_mut();
                    if !inner.cancelled.contains(&entry.id) {
                        inner.entries.push(Entry {
                            id: entry.id,
                            due: entry.due + u64::from(period.max(1)),
                            task: Task::Repeat(period, task),
                        });
                    }
                }
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn push(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = inner.next_id;
            let due = inner.now + u64::from(delay_ms);
            inner.entries.push(Entry { id, due, task });
            id
        };
        let weak = Rc::downgrade(&self.inner);
        TimerHandle::new(move || {
            if let Some(inner) = weak.upgrade() {
                // Handles may be dropped from inside a running task.
                if let Ok(mut inner) = inner.try_borrow_mut() {
                    inner.entries.retain(|entry| entry.id != id);
                    inner.cancelled.insert(id);
                }
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> u64 {
        self.inner.borrow().now
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        self.push(delay_ms, Task::Once(task))
    }

    fn schedule_interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerHandle {
        self.push(period_ms, Task::Repeat(period_ms, task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fires_in_due_order_and_respects_cancel() {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = log.clone();
        let _late = clock.schedule(200, Box::new(move || a.borrow_mut().push("late")));
        let b = log.clone();
        let _early = clock.schedule(100, Box::new(move || b.borrow_mut().push("early")));
        let c = log.clone();
        let dropped = clock.schedule(150, Box::new(move || c.borrow_mut().push("dropped")));
        drop(dropped);

        clock.advance(199);
        assert_eq!(*log.borrow(), vec!["early"]);
        clock.advance(1);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(clock.now_ms(), 200);
    }

    #[test]
    fn interval_repeats_until_dropped() {
        let clock = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = clock.schedule_interval(500, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(1600);
        assert_eq!(ticks.get(), 3);
        drop(handle);
        clock.advance(5000);
        assert_eq!(ticks.get(), 3);
        assert_eq!(clock.pending(), 0);
    }
}
