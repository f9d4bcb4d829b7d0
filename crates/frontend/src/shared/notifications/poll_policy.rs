/// Decides on which timer ticks the notification endpoint is polled.
///
/// Every tick counts; a poll fires when forced, or when the document has focus
/// and at least `threshold` ticks have passed since the last poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    ticks: u32,
    threshold: u32,
}

impl PollPolicy {
    pub fn new(threshold: u32) -> Self {
        Self {
            ticks: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Register one tick. Returns whether a request should be sent now.
    pub fn tick(&mut self, has_focus: bool, force: bool) -> bool {
        self.ticks = self.ticks.saturating_add(1);
        if force || (has_focus && self.ticks >= self.threshold) {
            self.ticks = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_threshold_ticks_with_focus() {
        let mut policy = PollPolicy::new(3);
        let fired: Vec<bool> = (0..6).map(|_| policy.tick(true, false)).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_no_poll_without_focus() {
        let mut policy = PollPolicy::new(2);
        for _ in 0..10 {
            assert!(!policy.tick(false, false));
        }
        assert_eq!(policy.ticks(), 10);
        // focus returns: the backlog fires at once
        assert!(policy.tick(true, false));
        assert_eq!(policy.ticks(), 0);
    }

    #[test]
    fn test_force_fires_and_resets() {
        let mut policy = PollPolicy::new(5);
        assert!(policy.tick(false, true));
        assert_eq!(policy.ticks(), 0);
        assert!(!policy.tick(true, false));
    }

    #[test]
    fn test_zero_threshold_means_every_tick() {
        let mut policy = PollPolicy::new(0);
        assert!(policy.tick(true, false));
        assert!(policy.tick(true, false));
    }
}
