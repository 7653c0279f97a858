//! Simulated QR scanner
//!
//! Two states, `Idle` and `Scanning`. Starting a scan hands back a
//! [`ScanTicket`]; the event loop sleeps for `ticket.delay` and then feeds
//! `Message::ScanCompleted` with the ticket's id. A second start while a scan
//! is running is rejected, so at most one timer is ever pending.

use std::time::Duration;

/// Current scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning {
        scan_id: u64,
    },
}

/// Handed out when a scan starts; identifies the completion to expect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket {
    pub scan_id: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct ScanSimulator {
    state: ScanState,
    next_scan_id: u64,
    rejected: u64,
    delay: Duration,
}

impl ScanSimulator {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: ScanState::Idle,
            next_scan_id: 1,
            rejected: 0,
            delay,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Scanning { .. })
    }

    /// How many start requests were turned away because a scan was running
    pub fn rejected_count(&self) -> u64 {
        self.rejected
    }

    /// idle → scanning. Returns `None` (and changes nothing) if a scan is
    /// already running.
    pub fn start(&mut self) -> Option<ScanTicket> {
        if self.is_scanning() {
            self.rejected += 1;
            return None;
        }

        let scan_id = self.next_scan_id;
        self.next_scan_id += 1;
        self.state = ScanState::Scanning { scan_id };

        Some(ScanTicket {
            scan_id,
            delay: self.delay,
        })
    }

    /// scanning → idle, if `scan_id` is the running scan. Returns whether the
    /// completion was accepted.
    pub fn complete(&mut self, scan_id: u64) -> bool {
        match self.state {
            ScanState::Scanning { scan_id: running } if running == scan_id => {
                self.state = ScanState::Idle;
                true
            }
            _ => false,
        }
    }
}

impl Default for ScanSimulator {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let scanner = ScanSimulator::default();
        assert_eq!(scanner.state(), ScanState::Idle);
        assert_eq!(scanner.delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_start_moves_to_scanning() {
        let mut scanner = ScanSimulator::default();
        let ticket = scanner.start().unwrap();

        assert!(scanner.is_scanning());
        assert_eq!(
            scanner.state(),
            ScanState::Scanning {
                scan_id: ticket.scan_id
            }
        );
        assert_eq!(ticket.delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut scanner = ScanSimulator::default();
        let first = scanner.start().unwrap();

        assert!(scanner.start().is_none());
        assert_eq!(scanner.rejected_count(), 1);
        assert_eq!(
            scanner.state(),
            ScanState::Scanning {
                scan_id: first.scan_id
            }
        );
    }

    #[test]
    fn test_complete_returns_to_idle() {
        let mut scanner = ScanSimulator::default();
        let ticket = scanner.start().unwrap();

        assert!(scanner.complete(ticket.scan_id));
        assert_eq!(scanner.state(), ScanState::Idle);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut scanner = ScanSimulator::default();
        let first = scanner.start().unwrap();
        scanner.complete(first.scan_id);
        let second = scanner.start().unwrap();

        assert!(!scanner.complete(first.scan_id));
        assert!(scanner.is_scanning());
        assert!(scanner.complete(second.scan_id));
    }

    #[test]
    fn test_complete_while_idle_is_ignored() {
        let mut scanner = ScanSimulator::default();
        assert!(!scanner.complete(1));
        assert_eq!(scanner.state(), ScanState::Idle);
    }

    #[test]
    fn test_custom_delay() {
        let mut scanner = ScanSimulator::new(Duration::from_millis(10));
        assert_eq!(scanner.start().unwrap().delay, Duration::from_millis(10));
    }
}
