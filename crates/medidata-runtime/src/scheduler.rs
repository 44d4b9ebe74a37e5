//! Deterministic virtual-time timer queue.
//!
//! Time only moves when the owner calls [`Scheduler::advance`]. Timers fire
//! in due-time order; timers due at the same instant fire in the order they
//! were scheduled. A recurring timer is re-armed before its event is handed
//! out, so cancelling it from the handler stops further fires.

use std::time::Duration;

/// Handle returned when scheduling; used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    due: Duration,
    seq: u64,
    every: Option<Duration>,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute virtual time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerId {
        self.push(delay, None, event)
    }

    /// Fire every `interval`, first after one interval. Zero is raised to 1 ms
    /// so a recurring timer can never pin virtual time in place.
    pub fn schedule_every(&mut self, interval: Duration, event: E) -> TimerId {
        let interval = interval.max(Duration::from_millis(1));
        self.push(interval, Some(interval), event)
    }

    /// Returns false when the timer already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Move virtual time forward to `deadline` without firing anything.
    /// Timers due before `deadline` must already have been popped.
    pub fn move_to(&mut self, deadline: Duration) {
        debug_assert!(self.next_due().is_none_or(|due| due > deadline));
        self.now = self.now.max(deadline);
    }

    fn push(&mut self, delay: Duration, every: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            seq,
            every,
            event,
        });
        id
    }

    fn earliest_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index)
    }
}

impl<E: Clone> Scheduler<E> {
    /// Pop the earliest timer due at or before `deadline`, moving virtual time
    /// to its due instant. Returns `None` (time unchanged) when nothing is due.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TimerId, E)> {
        let index = self.earliest_index()?;
        if self.entries[index].due > deadline {
            return None;
        }

        self.now = self.now.max(self.entries[index].due);

        match self.entries[index].every {
            Some(interval) => {
                let seq = self.next_seq;
                self.next_seq += 1;
                let entry = &mut self.entries[index];
                entry.due += interval;
                entry.seq = seq;
                Some((entry.id, entry.event.clone()))
            }
            None => {
                let entry = self.entries.swap_remove(index);
                Some((entry.id, entry.event))
            }
        }
    }

    /// Move time forward by `by`, returning every timer that fired in order.
    ///
    /// Callers that must react between fires (for example to cancel a
    /// recurring timer) should loop on [`Scheduler::pop_due`] instead.
    pub fn advance(&mut self, by: Duration) -> Vec<(TimerId, E)> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(item) = self.pop_due(deadline) {
            fired.push(item);
        }
        self.move_to(deadline);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_one_shot_fires_once_at_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(ms(2000), "connect");

        assert!(scheduler.advance(ms(1999)).is_empty());
        let fired = scheduler.advance(ms(1));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1, "connect");
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.now(), ms(2000));
    }

    #[test]
    fn test_recurring_fires_each_interval() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule_every(ms(500), "tick");

        let fired = scheduler.advance(ms(1600));
        assert_eq!(fired.len(), 3);
        assert!(fired.iter().all(|(fired_id, _)| *fired_id == id));
        assert_eq!(scheduler.next_due(), Some(ms(2000)));
    }

    #[test]
    fn test_cancel_prevents_fire() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule_once(ms(10), ());
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance(ms(100)).is_empty());
    }

    #[test]
    fn test_same_instant_fires_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(ms(100), 'a');
        scheduler.schedule_once(ms(50), 'b');
        scheduler.schedule_once(ms(100), 'c');

        let order: Vec<char> = scheduler.advance(ms(100)).into_iter().map(|(_, e)| e).collect();
        assert_eq!(order, vec!['b', 'a', 'c']);
    }

    #[test]
    fn test_pop_due_moves_time_to_fire_instant() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(ms(300), ());
        assert!(scheduler.pop_due(ms(1000)).is_some());
        assert_eq!(scheduler.now(), ms(300));
        assert!(scheduler.pop_due(ms(1000)).is_none());
        assert_eq!(scheduler.now(), ms(300));
    }

    #[test]
    fn test_cancel_all_clears_recurring() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(ms(1), ());
        scheduler.schedule_once(ms(5), ());
        assert_eq!(scheduler.cancel_all(), 2);
        assert!(scheduler.advance(ms(10)).is_empty());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(Duration::ZERO, ());
        assert_eq!(scheduler.advance(ms(3)).len(), 3);
    }
}
