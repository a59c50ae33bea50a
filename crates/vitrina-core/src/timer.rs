//! One-shot timers on the virtual millisecond clock.
//!
//! The queue never fires on its own; the engine pops due entries while
//! advancing time, which keeps every run reproducible.

/// Handle to a scheduled timer, usable to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct TimerEntry<T> {
    id: TimerId,
    deadline_ms: u64,
    task: T,
}

/// One-shot timer queue ordered by deadline, then schedule order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<TimerEntry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline_ms: u64, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            deadline_ms,
            task,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline_ms).min()
    }

    /// Pop the earliest entry due at or before `now_ms`.
    ///
    /// Entries sharing a deadline come out in schedule order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerId, T)> {
        let mut best: Option<usize> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.deadline_ms > now_ms {
                continue;
            }
            match best {
                Some(b) if self.entries[b].deadline_ms <= entry.deadline_ms => {}
                _ => best = Some(i),
            }
        }
        best.map(|i| {
            let entry = self.entries.remove(i);
            (entry.id, entry.task)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
