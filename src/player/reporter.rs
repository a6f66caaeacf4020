// Throttled progress reporting decisions

/// Minimum forward percentage delta between reports. A delta of exactly
/// this many points triggers a report.
pub const REPORT_STEP_PERCENT: i16 = 5;

/// Completion threshold, inclusive.
pub const COMPLETION_THRESHOLD_PERCENT: u8 = 80;

/// One accepted playback sample, ready to be packaged into a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSample {
    pub percentage: u8,
    pub position_seconds: u64,
    pub completed: bool,
}

/// Decides which playback position samples become progress reports.
///
/// Owned by one lesson view; a fresh view starts over from zero. The last
/// reported percentage advances as soon as a sample is accepted, so a
/// failed submission is never re-reported.
#[derive(Debug, Default)]
pub struct ProgressThrottle {
    last_reported_percentage: u8,
}

impl ProgressThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one `(position, duration)` sample from the playing media.
    /// Returns a sample to report when forward progress since the last
    /// report reaches the step size.
    pub fn observe(
        &mut self,
        current_seconds: f64,
        duration_seconds: f64,
    ) -> Option<ProgressSample> {
        // No meaningful percentage without a known duration
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return None;
        }
        let current = current_seconds.max(0.0);
        let percentage = ((current / duration_seconds) * 100.0).floor().min(100.0) as u8;

        // Rewinds make the delta negative and are suppressed along with
        // small forward steps
        if i16::from(percentage) - i16::from(self.last_reported_percentage) < REPORT_STEP_PERCENT {
            return None;
        }
        self.last_reported_percentage = percentage;

        Some(ProgressSample {
            percentage,
            position_seconds: current.floor() as u64,
            completed: percentage >= COMPLETION_THRESHOLD_PERCENT,
        })
    }

    pub fn last_reported_percentage(&self) -> u8 {
        self.last_reported_percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_boundary_is_inclusive() {
        let mut throttle = ProgressThrottle::new();
        assert_eq!(throttle.observe(4.0, 100.0), None);
        let sample = throttle.observe(5.0, 100.0).expect("5 points triggers");
        assert_eq!(sample.percentage, 5);
        assert_eq!(throttle.last_reported_percentage(), 5);
    }

    #[test]
    fn small_forward_steps_are_gated() {
        let mut throttle = ProgressThrottle::new();
        assert!(throttle.observe(50.0, 100.0).is_some());
        assert_eq!(throttle.observe(52.0, 100.0), None);
        let sample = throttle.observe(55.0, 100.0).expect("delta of 5 reports");
        assert_eq!(sample.percentage, 55);
    }

    #[test]
    fn rewind_suppresses_reporting_until_checkpoint_passed() {
        let mut throttle = ProgressThrottle::new();
        assert!(throttle.observe(50.0, 100.0).is_some());
        // Rewind to 20%: negative delta, nothing reported
        assert_eq!(throttle.observe(20.0, 100.0), None);
        assert_eq!(throttle.observe(51.0, 100.0), None);
        assert!(throttle.observe(55.0, 100.0).is_some());
    }

    #[test]
    fn completion_threshold_is_inclusive() {
        let mut throttle = ProgressThrottle::new();
        let below = throttle.observe(79.0, 100.0).unwrap();
        assert!(!below.completed);
        let mut throttle = ProgressThrottle::new();
        let at = throttle.observe(80.0, 100.0).unwrap();
        assert!(at.completed);
    }

    #[test]
    fn zero_or_unknown_duration_never_reports() {
        let mut throttle = ProgressThrottle::new();
        assert_eq!(throttle.observe(500.0, 0.0), None);
        assert_eq!(throttle.observe(500.0, f64::NAN), None);
        assert_eq!(throttle.observe(500.0, -1.0), None);
        assert_eq!(throttle.last_reported_percentage(), 0);
    }

    #[test]
    fn sample_values_are_floored() {
        let mut throttle = ProgressThrottle::new();
        let sample = throttle.observe(37.8, 300.0).unwrap();
        assert_eq!(sample.percentage, 12);
        assert_eq!(sample.position_seconds, 37);
        assert!(!sample.completed);
    }

    #[test]
    fn percentage_is_clamped_to_hundred() {
        let mut throttle = ProgressThrottle::new();
        let sample = throttle.observe(310.0, 300.0).unwrap();
        assert_eq!(sample.percentage, 100);
        assert!(sample.completed);
    }
}
