//! Availability
//!
//! Whether the store is taking orders at a given wall-clock time, and when it opens
//! next. Each calendar day is judged by its own row of the weekly table, so 00:30 on a
//! Saturday is open (Saturday's row has the after-midnight window) while 00:30 on a
//! Sunday is closed.

use std::fmt;

use jiff::{
    Timestamp,
    civil::{DateTime, Time, Weekday},
    tz::TimeZone,
};
use smallvec::SmallVec;

pub mod schedule;

pub use schedule::{HourWindow, STANDARD_WEEK, ScheduleRow};

use schedule::{format_time, next_day, weekday_name};

/// When the store next takes orders, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextOpening {
    /// Inside the after-midnight tail; open until the given time.
    TodayUntil(Time),

    /// Opens later today.
    TodayAt(Time),

    /// Opens tomorrow.
    Tomorrow(Time),

    /// Opens on a named weekday.
    On(Weekday, Time),
}

impl fmt::Display for NextOpening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextOpening::TodayUntil(t) => write!(f, "hoje até {}", format_time(*t)),
            NextOpening::TodayAt(t) => write!(f, "hoje às {}", format_time(*t)),
            NextOpening::Tomorrow(t) => write!(f, "amanhã às {}", format_time(*t)),
            NextOpening::On(day, t) => write!(f, "{} às {}", weekday_name(*day), format_time(*t)),
        }
    }
}

/// Open or closed at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    /// Taking orders
    Open,

    /// Not taking orders
    Closed {
        /// When the store opens again; `None` for a schedule with no open days
        next_opening: Option<NextOpening>,
    },
}

impl Availability {
    /// Whether orders are accepted.
    pub fn is_open(&self) -> bool {
        matches!(self, Availability::Open)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Open => f.write_str("ABERTO"),
            Availability::Closed { .. } => f.write_str("FECHADO"),
        }
    }
}

/// Weekly opening schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    rows: SmallVec<[ScheduleRow; 4]>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl Schedule {
    /// Schedule built from `rows`. Days with no row are closed.
    pub fn new(rows: impl IntoIterator<Item = ScheduleRow>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// The storefront's hours: Sunday to Thursday 18:00–24:00, Friday and Saturday
    /// 18:00–01:00.
    pub fn standard() -> Self {
        Self::new(STANDARD_WEEK)
    }

    /// Row that applies to `day`, if any.
    pub fn row_for(&self, day: Weekday) -> Option<&ScheduleRow> {
        self.rows.iter().find(|row| row.applies_to(day))
    }

    /// Whether orders are accepted at `at`. Only the weekday and hour matter.
    pub fn is_open(&self, at: DateTime) -> bool {
        self.row_for(at.weekday())
            .is_some_and(|row| row.is_open_at(at.hour()))
    }

    /// Open/closed state at `at`, with the next opening when closed.
    pub fn status(&self, at: DateTime) -> Availability {
        if self.is_open(at) {
            return Availability::Open;
        }

        Availability::Closed {
            next_opening: self.next_opening(at),
        }
    }

    /// Describe the next opening as seen from `at`.
    ///
    /// Inside the after-midnight tail this is the closing time; before the day's opening
    /// time it's today; otherwise it's the next day with a row, named when it starts a new
    /// week or isn't tomorrow. Returns `None` only for a schedule with no rows.
    pub fn next_opening(&self, at: DateTime) -> Option<NextOpening> {
        let today = at.weekday();
        let hour = at.hour();

        if let Some(row) = self.row_for(today) {
            if row.in_overnight_tail(hour) {
                return Some(NextOpening::TodayUntil(row.closes_at));
            }

            if hour < row.opens_at.hour() {
                return Some(NextOpening::TodayAt(row.opens_at));
            }
        }

        let mut day = today;

        for days_ahead in 1..=7 {
            day = next_day(day);

            if let Some(row) = self.row_for(day) {
                return Some(if days_ahead == 1 && day != Weekday::Monday {
                    NextOpening::Tomorrow(row.opens_at)
                } else {
                    NextOpening::On(day, row.opens_at)
                });
            }
        }

        None
    }

    /// Current open/closed state, reading the clock in `tz` now.
    pub fn status_now(&self, tz: &TimeZone) -> Availability {
        self.status(now_in(tz))
    }

    /// Opening hours listing, one line per row, e.g. `Dom a Quinta: 18:00 às 23:45`.
    pub fn hours(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                format!(
                    "{}: {} às {}",
                    row.label,
                    format_time(row.opens_at),
                    format_time(row.closes_at)
                )
            })
            .collect()
    }
}

/// Current wall-clock time in `tz`.
pub fn now_in(tz: &TimeZone) -> DateTime {
    Timestamp::now().to_zoned(tz.clone()).datetime()
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    // 2025-10-13 is a Monday.
    fn at(day_of_month: i8, hour: i8, minute: i8) -> DateTime {
        date(2025, 10, day_of_month).at(hour, minute, 0, 0)
    }

    #[test]
    fn weekday_evening_is_open() {
        let schedule = Schedule::standard();

        assert!(!schedule.is_open(at(14, 17, 59)));
        assert!(schedule.is_open(at(14, 18, 0)));
        assert!(schedule.is_open(at(14, 23, 59)));
        assert!(!schedule.is_open(at(15, 0, 0)));
    }

    #[test]
    fn weekend_runs_past_midnight() {
        let schedule = Schedule::standard();

        assert!(schedule.is_open(at(17, 23, 30)));
        assert!(schedule.is_open(at(18, 0, 30)));
        assert!(!schedule.is_open(at(18, 1, 0)));
        assert!(!schedule.is_open(at(19, 0, 30)));
    }

    #[test]
    fn friday_after_midnight_uses_friday_row() {
        // Thursday night spills into Friday 00:30, which Friday's own row allows.
        assert!(Schedule::standard().is_open(at(17, 0, 30)));
    }

    #[test]
    fn overnight_tail_reports_closing_time() {
        let next = Schedule::standard().next_opening(at(18, 0, 30));

        assert_eq!(next, Some(NextOpening::TodayUntil(time(0, 50, 0, 0))));
        assert_eq!(next.map(|n| n.to_string()).as_deref(), Some("hoje até 00:50"));
    }

    #[test]
    fn before_opening_is_today() {
        let next = Schedule::standard().next_opening(at(14, 10, 0));

        assert_eq!(next.map(|n| n.to_string()).as_deref(), Some("hoje às 18:00"));
    }

    #[test]
    fn after_opening_is_tomorrow() {
        let next = Schedule::standard().next_opening(at(14, 20, 0));

        assert_eq!(next, Some(NextOpening::Tomorrow(time(18, 0, 0, 0))));
    }

    #[test]
    fn sunday_names_monday() {
        let next = Schedule::standard().next_opening(at(19, 20, 0));

        assert_eq!(next, Some(NextOpening::On(Weekday::Monday, time(18, 0, 0, 0))));
        assert_eq!(
            next.map(|n| n.to_string()).as_deref(),
            Some("segunda-feira às 18:00")
        );
    }

    #[test]
    fn closed_days_are_skipped() {
        let schedule = Schedule::new([ScheduleRow {
            days: &[Weekday::Friday],
            ..schedule::FRIDAY_AND_SATURDAY
        }]);

        let next = schedule.next_opening(at(14, 20, 0));

        assert_eq!(next, Some(NextOpening::On(Weekday::Friday, time(18, 0, 0, 0))));
    }

    #[test]
    fn status_carries_next_opening() {
        let status = Schedule::standard().status(at(14, 12, 0));

        assert_eq!(
            status,
            Availability::Closed {
                next_opening: Some(NextOpening::TodayAt(time(18, 0, 0, 0)))
            }
        );
        assert_eq!(status.to_string(), "FECHADO");
        assert!(Schedule::standard().status(at(14, 19, 0)).is_open());
    }

    #[test]
    fn hours_listing() {
        assert_eq!(
            Schedule::standard().hours(),
            vec![
                "Dom a Quinta: 18:00 às 23:45".to_string(),
                "Sex e Sábado: 18:00 às 00:50".to_string(),
            ]
        );
    }
}
