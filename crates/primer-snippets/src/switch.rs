//! `match` on values, on several values per arm, and on runtime types.

use crate::{Context, Snippet, Topic, Transcript};
use chrono::{Datelike, Weekday};
use std::any::Any;
use std::fmt::{self, Debug};

pub fn name_of(i: i32) -> &'static str {
    match i {
        1 => "one",
        2 => "two",
        3 => "three",
        _ => "other",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekend,
    Workday,
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKind::Weekend => f.write_str("Weekend"),
            DayKind::Workday => f.write_str("workday"),
        }
    }
}

pub fn day_kind(day: Weekday) -> DayKind {
    match day {
        Weekday::Sat | Weekday::Sun => DayKind::Weekend,
        _ => DayKind::Workday,
    }
}

/// Names the concrete type behind `value`; unrecognised types echo the value.
pub fn who_am_i<T: Any + Debug>(value: &T) -> String {
    let any: &dyn Any = value;
    if any.is::<i32>() || any.is::<i64>() {
        "int".to_string()
    } else if any.is::<String>() || any.is::<&'static str>() {
        "string".to_string()
    } else if any.is::<bool>() {
        "its a boolean".to_string()
    } else {
        format!("other {value:?}")
    }
}

pub struct Switch;

impl Snippet for Switch {
    fn topic(&self) -> Topic {
        Topic::Switch
    }

    fn run(&self, ctx: &Context, out: &mut Transcript) {
        // the default arm leaves its line open, so the weekday lands after it
        let i = 5;
        match i {
            1..=3 => out.line(name_of(i)),
            _ => out.print(name_of(i)),
        };

        let today = ctx.now().weekday();
        out.line(format!("{today}: {}", day_kind(today)));

        out.line(who_am_i(&"golang"));
        out.line(who_am_i(&42));
        out.line(who_am_i(&true));
        out.line(who_am_i(&1.5));
    }
}
