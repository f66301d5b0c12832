// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A cancellable set of one-shot timers driven by virtual time.
//!
//! The set never reads the wall clock. Its owner moves time forward with
//! [`TimerSet::advance`] and then pops due timers one by one with
//! [`TimerSet::pop_due`]. A timer scheduled while a due timer is being handled
//! is measured from that timer's deadline, so a chain of delays adds up exactly
//! no matter how coarse the owner's ticks are.

use std::time::Duration;

#[derive(Debug)]
struct PendingTimer<A> {
    /// Scheduling order, used to break deadline ties.
    seq: u64,
    deadline: Duration,
    action: A,
}

/// Outstanding one-shot timers carrying an action payload `A`.
///
/// Every timer is registered at schedule time and removed when it fires or is
/// cancelled, so [`TimerSet::cancel_all`] is the single place that stops
/// everything.
#[derive(Debug)]
pub struct TimerSet<A> {
    /// Time reached by the last `advance`.
    clock: Duration,
    /// Time of the timer being handled; equals `clock` between ticks.
    cursor: Duration,
    next_seq: u64,
    pending: Vec<PendingTimer<A>>,
}

impl<A> TimerSet<A> {
    /// Creates an empty set at time zero.
    pub fn new() -> Self {
        Self {
            clock: Duration::ZERO,
            cursor: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Schedules `action` to become due `delay` from now.
    pub fn schedule(&mut self, delay: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            seq,
            deadline: self.cursor + delay,
            action,
        });
    }

    /// Cancels every outstanding timer and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Moves the clock forward by `dt`. Due timers are collected with [`TimerSet::pop_due`].
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
    }

    /// Removes and returns the earliest timer whose deadline has been reached.
    ///
    /// Ties fire in scheduling order. Returns `None` once nothing is due.
    pub fn pop_due(&mut self) -> Option<A> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= self.clock)
            .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
            .map(|(position, _)| position);

        match position {
            Some(position) => {
                let timer = self.pending.remove(position);
                self.cursor = timer.deadline;
                Some(timer.action)
            }
            None => {
                self.cursor = self.clock;
                None
            }
        }
    }

    /// Number of outstanding timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no timer is outstanding.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<A> Default for TimerSet<A> {
    fn default() -> Self {
        Self::new()
    }
}
