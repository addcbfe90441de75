//! Taskbar clock readout.

/// Wall-clock hour and minute sampled for the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Hour of day, `0..24`.
    pub hour: u32,
    /// Minute of hour, `0..60`.
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Samples local time from the browser. Native builds report midnight.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self::new(date.get_hours(), date.get_minutes());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(0, 0)
        }
    }
}

/// Formats `snapshot` as a 12-hour `hh:mm AM` string.
pub fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn midnight_and_noon_read_as_twelve() {
        assert_eq!(format_clock_time(ClockSnapshot::new(0, 0)), "12:00 AM");
        assert_eq!(format_clock_time(ClockSnapshot::new(12, 30)), "12:30 PM");
    }

    #[test]
    fn pads_hour_and_minute() {
        assert_eq!(format_clock_time(ClockSnapshot::new(9, 5)), "09:05 AM");
        assert_eq!(format_clock_time(ClockSnapshot::new(23, 59)), "11:59 PM");
    }
}
