use chrono::NaiveDate;

// ============================================================================
// DateWindow: a contiguous run of distinct calendar dates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    // Distinct dates in ascending order, always `window_days` of them
    pub dates: Vec<NaiveDate>,
}

impl DateWindow {
    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        // Dates are sorted; the run is contiguous within the source's
        // distinct-date list, so a range check is enough.
        date >= self.start() && date <= self.end()
    }
}

/// Slide a window of `window_days` distinct dates across the sorted
/// distinct-date list, one date at a time. Consecutive windows overlap by
/// `window_days - 1` dates. Too little data is not an error: the caller
/// simply receives an empty sequence.
pub fn segment_windows(distinct_dates: &[NaiveDate], window_days: usize) -> Vec<DateWindow> {
    if window_days == 0 || distinct_dates.len() < window_days {
        return Vec::new();
    }

    debug_assert!(distinct_dates.is_sorted());

    (0..=distinct_dates.len() - window_days)
        .map(|i| DateWindow {
            dates: distinct_dates[i..i + window_days].to_vec(),
        })
        .collect()
}
