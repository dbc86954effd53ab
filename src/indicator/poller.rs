//! Change detection between successive status samples.

use crate::model::ImeStatus;

/// Remembers the last sample and reports when it changes.
#[derive(Debug, Default)]
pub struct StatusPoller {
    last: Option<ImeStatus>,
}

impl StatusPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `status`; returns true when it differs from the previous one.
    ///
    /// The first sample after construction or [`reset`](Self::reset)
    /// always counts as a change.
    pub fn observe(&mut self, status: ImeStatus) -> bool {
        if self.last == Some(status) {
            return false;
        }
        self.last = Some(status);
        true
    }

    /// Forget the last sample so the next one is reported.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<ImeStatus> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConversionMode;

    #[test]
    fn first_sample_is_a_change() {
        let mut poller = StatusPoller::new();
        assert!(poller.observe(ImeStatus::default()));
    }

    #[test]
    fn repeated_sample_is_not_a_change() {
        let mut poller = StatusPoller::new();
        let status = ImeStatus::new(ConversionMode::from_bits(1), false);
        poller.observe(status);
        assert!(!poller.observe(status));
        assert!(!poller.observe(status));
    }

    #[test]
    fn caps_lock_alone_is_a_change() {
        let mut poller = StatusPoller::new();
        poller.observe(ImeStatus::new(ConversionMode::default(), false));
        assert!(poller.observe(ImeStatus::new(ConversionMode::default(), true)));
    }

    #[test]
    fn reset_reports_same_sample_again() {
        let mut poller = StatusPoller::new();
        let status = ImeStatus::default();
        poller.observe(status);
        poller.reset();
        assert_eq!(poller.last(), None);
        assert!(poller.observe(status));
    }
}
