use time::{Date, Duration, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// A Sunday-to-Saturday span of seven consecutive dates with a 1-based
/// sequential number
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Week {
    pub(crate) number: u32,
    pub(crate) days: [Date; DAYS_IN_WEEK],
}

impl Week {
    fn starting(number: u32, sunday: Date) -> Week {
        let mut days = [sunday; DAYS_IN_WEEK];
        for i in 1..DAYS_IN_WEEK {
            days[i] = days[i - 1].saturating_add(Duration::DAY);
        }
        Week { number, days }
    }

    pub(crate) fn saturday(&self) -> Date {
        self.days[DAYS_IN_WEEK - 1]
    }

    pub(crate) fn day(&self, index: u8) -> Option<Date> {
        self.days.get(usize::from(index)).copied()
    }
}

/// The Sunday on or before `date`
pub(crate) fn anchor_sunday(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_sunday()))
}

/// Zero-based days-from-Sunday index of a weekday
pub(crate) fn weekday_index(weekday: Weekday) -> u8 {
    weekday.number_days_from_sunday()
}

/// Computes the ordered sequence of Sunday-first weeks covering `[start,
/// end]`.  The first week begins on the Sunday on or before `start`, and
/// generation stops with the first week whose Saturday falls on or after
/// `end` (that week is included).  Pure and deterministic; same inputs
/// always produce the same sequence.
pub(crate) fn compute_weeks(start: Date, end: Date) -> Vec<Week> {
    let mut weeks = Vec::new();
    let mut sunday = Some(anchor_sunday(start));
    let mut number = 1;
    while let Some(first) = sunday {
        let week = Week::starting(number, first);
        let saturday = week.saturday();
        weeks.push(week);
        if saturday >= end {
            break;
        }
        sunday = saturday.next_day();
        number += 1;
    }
    weeks
}

/// Where a date falls relative to the displayed window.  Both boundary
/// dates are in-range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DayClass {
    BeforeRange,
    InRange(Month),
    AfterRange,
}

pub(crate) fn classify(date: Date, start: Date, end: Date) -> DayClass {
    if date < start {
        DayClass::BeforeRange
    } else if date > end {
        DayClass::AfterRange
    } else {
        DayClass::InRange(date.month())
    }
}
