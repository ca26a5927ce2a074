use crate::models::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

/// One day of a staff member's week.
///
/// The wire form is always a `{start, end}` pair; an `Off` day is written as
/// both ends on the earliest grid time and any pair with equal ends reads back
/// as `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SlotRecord", into = "SlotRecord")]
pub enum DaySlot {
    #[default]
    Off,
    Shift {
        start: TimeOfDay,
        end: TimeOfDay,
    },
}

impl DaySlot {
    /// Equal ends mean no shift. A reversed pair is kept as-is.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        if start == end {
            DaySlot::Off
        } else {
            DaySlot::Shift { start, end }
        }
    }

    pub fn is_off(&self) -> bool {
        matches!(self, DaySlot::Off)
    }

    pub fn bounds(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match *self {
            DaySlot::Off => None,
            DaySlot::Shift { start, end } => Some((start, end)),
        }
    }

    /// Start/end as shown in the selectors, `Off` being both on the default.
    pub fn selector_values(&self) -> (TimeOfDay, TimeOfDay) {
        self.bounds()
            .unwrap_or((TimeOfDay::EARLIEST, TimeOfDay::EARLIEST))
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct SlotRecord {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl From<SlotRecord> for DaySlot {
    fn from(r: SlotRecord) -> Self {
        DaySlot::new(r.start, r.end)
    }
}

impl From<DaySlot> for SlotRecord {
    fn from(slot: DaySlot) -> Self {
        let (start, end) = slot.selector_values();
        SlotRecord { start, end }
    }
}
