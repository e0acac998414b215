//! Deferred save scheduling.
//!
//! A submission does not block. The form hands a [`SaveTicket`] to a
//! [`SaveTimer`] and the host feeds the ticket back when the delay elapses.
//! Tests drive [`ManualTimer`] on a virtual clock; async hosts plug in a
//! runtime-backed implementation.

use std::{collections::BTreeMap, fmt, time::Duration};

/// Default artificial delay of the simulated save.
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1500);

/// Identifies one scheduled save. Tickets are unique per form session and
/// increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaveTicket(u64);

impl SaveTicket {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SaveTicket {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "save#{}", self.0)
    }
}

/// Something that can fire a ticket after a delay, and forget it on request.
pub trait SaveTimer {
    /// Arranges for `ticket` to come due after `delay`.
    fn schedule(
        &mut self,
        ticket: SaveTicket,
        delay: Duration,
    );

    /// Forgets `ticket`. Cancelling an unknown or already fired ticket is a
    /// no-op.
    fn cancel(
        &mut self,
        ticket: SaveTicket,
    );
}

/// Virtual-clock timer. Nothing fires until [`ManualTimer::advance`] moves
/// time past a deadline.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    pending: BTreeMap<SaveTicket, Duration>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(
        &self,
        ticket: SaveTicket,
    ) -> bool {
        self.pending.contains_key(&ticket)
    }

    /// Moves the clock forward and returns the tickets that came due, ordered
    /// by deadline then ticket.
    pub fn advance(
        &mut self,
        by: Duration,
    ) -> Vec<SaveTicket> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, SaveTicket)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(ticket, deadline)| (*deadline, *ticket))
            .collect();
        due.sort_unstable();

        for (_, ticket) in &due {
            self.pending.remove(ticket);
        }
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

impl SaveTimer for ManualTimer {
    fn schedule(
        &mut self,
        ticket: SaveTicket,
        delay: Duration,
    ) {
        self.pending.insert(ticket, self.now + delay);
    }

    fn cancel(
        &mut self,
        ticket: SaveTicket,
    ) {
        self.pending.remove(&ticket);
    }
}
