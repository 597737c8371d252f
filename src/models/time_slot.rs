use serde::Serialize;

/// One of the four fixed daily teaching windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TimeSlot {
    First,
    Second,
    Third,
    Fourth,
}

impl TimeSlot {
    /// Priority order used by [`TimeSlot::canonicalize`] and display order.
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::First,
        TimeSlot::Second,
        TimeSlot::Third,
        TimeSlot::Fourth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::First => "9:00 AM - 10:30 AM",
            TimeSlot::Second => "10:45 AM - 12:15 PM",
            TimeSlot::Third => "12:30 PM - 2:00 PM",
            TimeSlot::Fourth => "2:15 PM - 3:45 PM",
        }
    }

    /// Start-time marker searched for in free text.
    pub fn marker(&self) -> &'static str {
        match self {
            TimeSlot::First => "9:00 AM",
            TimeSlot::Second => "10:45 AM",
            TimeSlot::Third => "12:30 PM",
            TimeSlot::Fourth => "2:15 PM",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_last(&self) -> bool {
        matches!(self, TimeSlot::Fourth)
    }

    /// Maps the time portion of `day_time` onto a slot; first marker found wins.
    /// Unrecognised text yields `None` and the session gets no cell placement.
    pub fn canonicalize(time_text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| time_text.contains(slot.marker()))
    }

    /// Same as [`TimeSlot::canonicalize`] but returns the label, or `""` when unmapped.
    pub fn canonical_label(time_text: &str) -> &'static str {
        Self::canonicalize(time_text).map_or("", |s| s.label())
    }
}

/// Splits `"Monday 9:00 AM - 10:30 AM"` into `("Monday", "9:00 AM - 10:30 AM")`.
pub fn split_day_time(day_time: &str) -> (&str, &str) {
    day_time.split_once(' ').unwrap_or((day_time, ""))
}
