use super::clock::DAY_MS;

/// Coarse posting-age category. Derived from `now - date_posted`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBucket {
    OneDay,
    ThreeDays,
    OneWeek,
    TwoWeeks,
    OneMonthPlus,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 5] = [
        AgeBucket::OneDay,
        AgeBucket::ThreeDays,
        AgeBucket::OneWeek,
        AgeBucket::TwoWeeks,
        AgeBucket::OneMonthPlus,
    ];

    /// Bucket for a posting time relative to `now` (both epoch millis).
    ///
    /// Whole days are rounded up, so anything up to 24h old is "1 Day" and a
    /// posting exactly 7 days old is still "1 Week".
    pub fn from_posted(date_posted: i64, now: i64) -> Self {
        let diff = now.abs_diff(date_posted);
        let days = diff.div_ceil(DAY_MS.unsigned_abs());

        match days {
            0..=1 => AgeBucket::OneDay,
            2..=3 => AgeBucket::ThreeDays,
            4..=7 => AgeBucket::OneWeek,
            8..=14 => AgeBucket::TwoWeeks,
            _ => AgeBucket::OneMonthPlus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBucket::OneDay => "1 Day",
            AgeBucket::ThreeDays => "3 Days",
            AgeBucket::OneWeek => "1 Week",
            AgeBucket::TwoWeeks => "2 Weeks",
            AgeBucket::OneMonthPlus => "1 Month+",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AgeBucket::OneDay => "🕐",
            AgeBucket::ThreeDays => "📅",
            AgeBucket::OneWeek => "🗓️",
            AgeBucket::TwoWeeks => "📆",
            AgeBucket::OneMonthPlus => "⏳",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_750_000_000_000;

    fn days_ago(days: i64) -> i64 {
        NOW - days * DAY_MS
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive() {
        assert_eq!(AgeBucket::from_posted(NOW, NOW), AgeBucket::OneDay);
        assert_eq!(AgeBucket::from_posted(days_ago(1), NOW), AgeBucket::OneDay);
        assert_eq!(AgeBucket::from_posted(days_ago(3), NOW), AgeBucket::ThreeDays);
        assert_eq!(AgeBucket::from_posted(days_ago(7), NOW), AgeBucket::OneWeek);
        assert_eq!(AgeBucket::from_posted(days_ago(14), NOW), AgeBucket::TwoWeeks);
        assert_eq!(
            AgeBucket::from_posted(days_ago(30), NOW),
            AgeBucket::OneMonthPlus
        );
    }

    #[test]
    fn test_partial_days_round_up() {
        // One millisecond past a full day is already day two.
        assert_eq!(
            AgeBucket::from_posted(days_ago(1) - 1, NOW),
            AgeBucket::ThreeDays
        );
        assert_eq!(
            AgeBucket::from_posted(days_ago(7) - 1, NOW),
            AgeBucket::TwoWeeks
        );
    }

    #[test]
    fn test_future_postings_use_absolute_distance() {
        assert_eq!(
            AgeBucket::from_posted(NOW + 2 * DAY_MS, NOW),
            AgeBucket::ThreeDays
        );
    }

    #[test]
    fn test_extreme_posting_times_do_not_overflow() {
        assert_eq!(
            AgeBucket::from_posted(i64::MIN, NOW),
            AgeBucket::OneMonthPlus
        );
        assert_eq!(
            AgeBucket::from_posted(i64::MAX, NOW),
            AgeBucket::OneMonthPlus
        );
        assert_eq!(
            AgeBucket::from_posted(i64::MIN, i64::MAX),
            AgeBucket::OneMonthPlus
        );
    }

    #[test]
    fn test_label_roundtrip() {
        for bucket in AgeBucket::ALL {
            assert_eq!(AgeBucket::from_label(bucket.label()), Some(bucket));
        }
    }
}
