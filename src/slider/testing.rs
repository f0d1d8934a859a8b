//! Virtual clock for driving the slider deterministically in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::controller::{Scheduler, SliderController, SliderMsg};

struct Pending {
    due: u64,
    seq: u64,
    msg: SliderMsg,
    repeat: Option<(u32, Rc<Cell<bool>>)>,
}

#[derive(Default)]
struct Queue {
    now: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl Queue {
    fn push(&mut self, due: u64, msg: SliderMsg, repeat: Option<(u32, Rc<Cell<bool>>)>) {
        self.seq += 1;
        self.pending.push(Pending { due, seq: self.seq, msg, repeat });
    }

    fn pop_due(&mut self, until: u64) -> Option<Pending> {
        self.pending.retain(|p| !is_cancelled(p));
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }
}

fn is_cancelled(pending: &Pending) -> bool {
    pending
        .repeat
        .as_ref()
        .map_or(false, |(_, cancelled)| cancelled.get())
}

#[derive(Clone, Default)]
pub struct ManualClock {
    queue: Rc<RefCell<Queue>>,
}

pub struct ManualInterval {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualInterval {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualInterval;

    fn repeat(&self, period_ms: u32, msg: SliderMsg) -> ManualInterval {
        let cancelled = Rc::new(Cell::new(false));
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + u64::from(period_ms);
        queue.push(due, msg, Some((period_ms, cancelled.clone())));
        ManualInterval { cancelled }
    }

    fn defer(&self, delay_ms: u32, msg: SliderMsg) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + u64::from(delay_ms);
        queue.push(due, msg, None);
    }
}

impl ManualClock {
    /// Moves time forward, delivering every message that falls due in order.
    pub fn advance(
        &self,
        controller: &mut SliderController<ManualClock>,
        ms: u64,
    ) -> Vec<SliderMsg> {
        let until = self.queue.borrow().now + ms;
        let mut delivered = Vec::new();
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let next = queue.pop_due(until);
                if let Some(pending) = &next {
                    queue.now = pending.due;
                    if let Some((period, cancelled)) = &pending.repeat {
                        let due = pending.due + u64::from(*period);
                        queue.push(due, pending.msg, Some((*period, cancelled.clone())));
                    }
                }
                next
            };
            let Some(pending) = next else { break };
            controller.handle(pending.msg);
            delivered.push(pending.msg);
        }
        self.queue.borrow_mut().now = until;
        delivered
    }

    pub fn live_repeating(&self) -> usize {
        self.queue
            .borrow()
            .pending
            .iter()
            .filter(|p| p.repeat.is_some() && !is_cancelled(p))
            .count()
    }

    pub fn pending_once(&self) -> usize {
        self.queue
            .borrow()
            .pending
            .iter()
            .filter(|p| p.repeat.is_none())
            .count()
    }
}
