/// Weekly and monthly minute totals reported by the backend.
///
/// Used only to drive the gradient progress chips; the client never computes
/// these aggregates itself, it just re-fetches them with the session set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    minutes_this_week: u32,
    minutes_this_month: u32,
}

impl ProgressSummary {
    /// Weekly activity target in minutes.
    pub const WEEKLY_TARGET_MINUTES: u32 = 150;

    /// Monthly activity target in minutes.
    pub const MONTHLY_TARGET_MINUTES: u32 = 600;

    #[must_use]
    pub fn new(minutes_this_week: u32, minutes_this_month: u32) -> Self {
        Self {
            minutes_this_week,
            minutes_this_month,
        }
    }

    #[must_use]
    pub fn minutes_this_week(&self) -> u32 {
        self.minutes_this_week
    }

    #[must_use]
    pub fn minutes_this_month(&self) -> u32 {
        self.minutes_this_month
    }

    /// Progress against the weekly target, as an unclamped percentage.
    #[must_use]
    pub fn weekly_percent(&self) -> f64 {
        f64::from(self.minutes_this_week) / f64::from(Self::WEEKLY_TARGET_MINUTES) * 100.0
    }

    /// Progress against the monthly target, as an unclamped percentage.
    #[must_use]
    pub fn monthly_percent(&self) -> f64 {
        f64::from(self.minutes_this_month) / f64::from(Self::MONTHLY_TARGET_MINUTES) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percents_scale_against_fixed_targets() {
        let summary = ProgressSummary::new(75, 150);
        assert!((summary.weekly_percent() - 50.0).abs() < f64::EPSILON);
        assert!((summary.monthly_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percents_can_exceed_one_hundred() {
        let summary = ProgressSummary::new(300, 1200);
        assert!((summary.weekly_percent() - 200.0).abs() < f64::EPSILON);
        assert!((summary.monthly_percent() - 200.0).abs() < f64::EPSILON);
    }
}
