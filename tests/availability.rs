//! Opening-hours boundaries of the standard weekly schedule.
//!
//! October 2025: the 13th is a Monday, so the 14th is Tuesday through the 19th, Sunday.

use jiff::civil::{DateTime, Weekday, date, time};

use pizzeria::prelude::*;

fn at(day: i8, hour: i8, minute: i8) -> DateTime {
    date(2025, 10, day).at(hour, minute, 0, 0)
}

#[test]
fn boundary_table() {
    let schedule = Schedule::standard();

    let cases = [
        ("Tue 17:59", at(14, 17, 59), false),
        ("Tue 18:00", at(14, 18, 0), true),
        ("Tue 23:59", at(14, 23, 59), true),
        ("Wed 00:00", at(15, 0, 0), false),
        ("Fri 23:30", at(17, 23, 30), true),
        ("Sat 00:30", at(18, 0, 30), true),
        ("Sat 00:59", at(18, 0, 59), true),
        ("Sat 01:00", at(18, 1, 0), false),
        ("Sun 00:30", at(19, 0, 30), false),
        ("Sun 18:00", at(19, 18, 0), true),
    ];

    for (label, when, open) in cases {
        assert_eq!(schedule.is_open(when), open, "{label}");
    }
}

#[test]
fn closed_status_explains_when_to_come_back() {
    let schedule = Schedule::standard();

    assert_eq!(
        schedule.status(at(15, 0, 0)),
        Availability::Closed {
            next_opening: Some(NextOpening::TodayAt(time(18, 0, 0, 0)))
        }
    );
    assert_eq!(
        schedule.next_opening(at(19, 22, 0)),
        Some(NextOpening::On(Weekday::Monday, time(18, 0, 0, 0)))
    );
    assert_eq!(
        schedule.next_opening(at(14, 22, 0)).map(|next| next.to_string()),
        Some("amanhã às 18:00".to_string())
    );
}
