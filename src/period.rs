use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{LABEL_PREFIX, LABEL_SEPARATOR};
use crate::date::CalendarDate;
use crate::error::{Error, Result};
use crate::prelude::*;

/// One pay period: an inclusive run of calendar days.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct PayPeriod {
    start: CalendarDate,
    end:   CalendarDate,
}

impl PayPeriod {
    /// Returns the first day of the period
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last day of the period (inclusive)
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Number of calendar days covered, counting both ends
    pub fn len_days(&self) -> i64 {
        self.end.days_since_epoch() - self.start.days_since_epoch() + 1
    }

    /// Checks if the period covers a given date
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// The year-less `e_MMDD_MMDD` label of this period.
    pub fn label(&self) -> PeriodLabel {
        PeriodLabel {
            pay_period: format!(
                "{LABEL_PREFIX}{LABEL_SEPARATOR}{}{LABEL_SEPARATOR}{}",
                self.start.month_day(),
                self.end.month_day()
            ),
        }
    }
}

/// Label of a pay period, e.g. `e_0101_0114`.
///
/// Serializes as a `{"pay_period": ...}` record. Labels carry no year, so two
/// periods a year apart can share one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{pay_period}")]
pub struct PeriodLabel {
    pay_period: String,
}

impl PeriodLabel {
    pub fn as_str(&self) -> &str {
        &self.pay_period
    }
}

impl From<PeriodLabel> for String {
    fn from(label: PeriodLabel) -> Self {
        label.pay_period
    }
}

/// Validated inputs for generating a run of pay periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodSpec {
    days_per_period: i64,
    period_count:    u64,
    start:           CalendarDate,
}

impl PeriodSpec {
    /// Validates the inputs, including that the last period still ends
    /// within the supported calendar.
    ///
    /// # Errors
    /// Returns `Error::InvalidDaysPerPeriod` if `days_per_period < 1`,
    /// `Error::InvalidPeriodCount` if `period_count < 0`, and
    /// `Error::CalendarOverflow` if the final period would end past the
    /// last supported date.
    pub fn new(days_per_period: i64, period_count: i64, start: CalendarDate) -> Result<Self> {
        if days_per_period < 1 {
            return Err(Error::InvalidDaysPerPeriod(days_per_period));
        }
        let count =
            u64::try_from(period_count).map_err(|_| Error::InvalidPeriodCount(period_count))?;

        if count > 0 {
            let overflow = || Error::CalendarOverflow {
                start,
                days_per_period,
                period_count,
            };
            let span = days_per_period
                .checked_mul(period_count)
                .ok_or_else(overflow)?;
            start.add_days(span - 1).map_err(|_| overflow())?;
        }

        Ok(Self {
            days_per_period,
            period_count: count,
            start,
        })
    }

    pub const fn days_per_period(&self) -> i64 {
        self.days_per_period
    }

    pub const fn period_count(&self) -> u64 {
        self.period_count
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// The pay periods in chronological order.
    pub const fn periods(&self) -> Periods {
        Periods {
            next_start:      Some(self.start),
            remaining:       self.period_count,
            days_per_period: self.days_per_period,
        }
    }

    /// Labels of every period, in chronological order.
    pub fn labels(&self) -> Vec<PeriodLabel> {
        self.periods().map(|period| period.label()).collect()
    }
}

/// Iterator over the periods of a [`PeriodSpec`].
///
/// Each period starts the day after the previous one ends.
#[derive(Debug, Clone)]
pub struct Periods {
    next_start:      Option<CalendarDate>,
    remaining:       u64,
    days_per_period: i64,
}

impl Iterator for Periods {
    type Item = PayPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.next_start?;
        // PeriodSpec::new already proved the whole run fits the calendar.
        let end = start.add_days(self.days_per_period - 1).ok()?;
        self.remaining -= 1;
        self.next_start = end.succ().ok();
        Some(PayPeriod { start, end })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Periods {}

/// Generates the labels of `period_count` contiguous pay periods of
/// `days_per_period` days each, beginning on `start_date`.
///
/// Either every label is returned or nothing is.
///
/// # Errors
/// Returns an [`Error`] of kind `InvalidArgument` for a non-positive period
/// length, a negative count, or a run that leaves the supported calendar.
pub fn generate(
    days_per_period: i64,
    period_count: i64,
    start_date: CalendarDate,
) -> Result<Vec<PeriodLabel>> {
    info!(
        "Listing pay periods: days_per_pay_period={days_per_period}; number_of_pay_periods={period_count}; start_datetime={start_date}"
    );

    let spec = PeriodSpec::new(days_per_period, period_count, start_date)?;
    Ok(spec.labels())
}
