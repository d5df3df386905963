//! Weekly Schedule

use jiff::civil::{Time, Weekday, time};

/// Hours of the day `[start, end)` during which orders are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourWindow {
    start: i8,
    end: i8,
}

impl HourWindow {
    /// Window from `start` (inclusive) to `end` (exclusive), in hours.
    pub const fn new(start: i8, end: i8) -> Self {
        Self { start, end }
    }

    /// Whether `hour` falls inside the window.
    pub fn contains(self, hour: i8) -> bool {
        hour >= self.start && hour < self.end
    }

    /// Whether this window is the early-morning tail of the previous evening.
    pub fn is_overnight_tail(self) -> bool {
        self.start == 0
    }
}

/// One row of the weekly table: the days it covers, the hours that count as open on
/// those days, and the times shown to customers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleRow {
    /// Short label for the day range, e.g. `Dom a Quinta`
    pub label: &'static str,

    /// Calendar days the row applies to
    pub days: &'static [Weekday],

    /// Open hours, evaluated against the calendar day's own row
    pub windows: &'static [HourWindow],

    /// Advertised opening time
    pub opens_at: Time,

    /// Advertised closing time
    pub closes_at: Time,
}

impl ScheduleRow {
    /// Whether the row covers `day`.
    pub fn applies_to(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether `hour` is inside one of the row's windows.
    pub fn is_open_at(&self, hour: i8) -> bool {
        self.windows.iter().any(|window| window.contains(hour))
    }

    /// Whether `hour` is inside the row's after-midnight window.
    pub fn in_overnight_tail(&self, hour: i8) -> bool {
        self.windows
            .iter()
            .any(|window| window.is_overnight_tail() && window.contains(hour))
    }
}

/// Sunday to Thursday: 18:00 until midnight.
pub const SUNDAY_TO_THURSDAY: ScheduleRow = ScheduleRow {
    label: "Dom a Quinta",
    days: &[
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ],
    windows: &[HourWindow::new(18, 24)],
    opens_at: time(18, 0, 0, 0),
    closes_at: time(23, 45, 0, 0),
};

/// Friday and Saturday: 18:00 until 01:00, with the hour after midnight judged on the
/// calendar day it falls on.
pub const FRIDAY_AND_SATURDAY: ScheduleRow = ScheduleRow {
    label: "Sex e Sábado",
    days: &[Weekday::Friday, Weekday::Saturday],
    windows: &[HourWindow::new(18, 24), HourWindow::new(0, 1)],
    opens_at: time(18, 0, 0, 0),
    closes_at: time(0, 50, 0, 0),
};

/// The storefront's weekly table.
pub const STANDARD_WEEK: [ScheduleRow; 2] = [SUNDAY_TO_THURSDAY, FRIDAY_AND_SATURDAY];

/// `HH:MM`
pub fn format_time(t: Time) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Day after `day`.
pub fn next_day(day: Weekday) -> Weekday {
    match day {
        Weekday::Monday => Weekday::Tuesday,
        Weekday::Tuesday => Weekday::Wednesday,
        Weekday::Wednesday => Weekday::Thursday,
        Weekday::Thursday => Weekday::Friday,
        Weekday::Friday => Weekday::Saturday,
        Weekday::Saturday => Weekday::Sunday,
        Weekday::Sunday => Weekday::Monday,
    }
}

/// Portuguese weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "segunda-feira",
        Weekday::Tuesday => "terça-feira",
        Weekday::Wednesday => "quarta-feira",
        Weekday::Thursday => "quinta-feira",
        Weekday::Friday => "sexta-feira",
        Weekday::Saturday => "sábado",
        Weekday::Sunday => "domingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_half_open() {
        let window = HourWindow::new(18, 24);

        assert!(!window.contains(17));
        assert!(window.contains(18));
        assert!(window.contains(23));
        assert!(!window.contains(0));
    }

    #[test]
    fn standard_week_covers_every_day_once() {
        let mut day = Weekday::Monday;

        for _ in 0..7 {
            let rows = STANDARD_WEEK
                .iter()
                .filter(|row| row.applies_to(day))
                .count();

            assert_eq!(rows, 1, "{day:?} should be covered by exactly one row");

            day = next_day(day);
        }
    }

    #[test]
    fn only_weekend_row_has_overnight_tail() {
        assert!(FRIDAY_AND_SATURDAY.in_overnight_tail(0));
        assert!(!SUNDAY_TO_THURSDAY.in_overnight_tail(0));
        assert!(!FRIDAY_AND_SATURDAY.in_overnight_tail(18));
    }

    #[test]
    fn formats_times() {
        assert_eq!(format_time(time(0, 50, 0, 0)), "00:50");
        assert_eq!(format_time(time(18, 0, 0, 0)), "18:00");
    }
}
