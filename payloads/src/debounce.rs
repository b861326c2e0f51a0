//! Generation gate behind debounced inputs.
//!
//! Each input change takes a ticket. A timer that fires later may only
//! publish its value if no newer ticket has been issued since, so a burst
//! of changes produces a single emission of the last value.

/// Quiet period before a search term is applied.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change, invalidating every earlier ticket.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// True when `ticket` is still the most recent one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_changes_emits_once_with_the_last_value() {
        let mut debouncer = Debouncer::new();
        let mut typed = String::new();
        let mut pending = Vec::new();
        for key in ["a", "b", "c"] {
            typed.push_str(key);
            pending.push((debouncer.issue(), typed.clone()));
        }

        // every timer fires after the burst
        let emitted: Vec<_> = pending
            .into_iter()
            .filter(|(ticket, _)| debouncer.is_current(*ticket))
            .map(|(_, value)| value)
            .collect();
        assert_eq!(emitted, vec!["abc".to_string()]);
    }

    #[test]
    fn spaced_changes_each_emit() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.issue();
        assert!(debouncer.is_current(first));
        let second = debouncer.issue();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}
