use chrono::{Days, NaiveDate, Weekday};

use crate::error::{CampsiteError, Result};

/// One arrival/departure combination to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePair {
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

/// The dates a check should cover: an explicit arrival/departure pair, or
/// every occurrence of a weekday within one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSpec {
    Explicit {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    Recurring {
        year: i32,
        month: u32,
        weekday: Weekday,
        nights: u32,
    },
}

impl DateSpec {
    /// Expand into the ordered, non-empty list of date pairs to search.
    ///
    /// The explicit form yields a single pair, with departure defaulting to
    /// the day after arrival. The recurring form yields one pair per
    /// occurrence of the weekday within the month (4 or 5), in chronological
    /// order, each `nights` long. Occurrences that a wall-calendar grid would
    /// borrow from adjacent months are not included.
    pub fn date_pairs(&self) -> Result<Vec<DatePair>> {
        match *self {
            Self::Explicit { start, end } => {
                let departure = match end {
                    Some(end) => end,
                    None => add_nights(start, 1)?,
                };
                if departure <= start {
                    return Err(CampsiteError::InvalidDate {
                        reason: format!("departure {departure} must fall after arrival {start}"),
                    });
                }
                Ok(vec![DatePair {
                    arrival: start,
                    departure,
                }])
            }
            Self::Recurring {
                year,
                month,
                weekday,
                nights,
            } => {
                if nights == 0 {
                    return Err(CampsiteError::InvalidDate {
                        reason: "number of nights must be at least 1".into(),
                    });
                }
                if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
                    return Err(CampsiteError::InvalidDate {
                        reason: format!("{year}-{month:02} is not a valid month"),
                    });
                }

                let mut pairs = Vec::new();
                for week in 1..=5u8 {
                    let Some(arrival) =
                        NaiveDate::from_weekday_of_month_opt(year, month, weekday, week)
                    else {
                        break;
                    };
                    pairs.push(DatePair {
                        arrival,
                        departure: add_nights(arrival, nights)?,
                    });
                }
                Ok(pairs)
            }
        }
    }
}

/// Parse a weekday name as given on the command line ("Friday", "fri", ...).
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.parse::<Weekday>()
        .map_err(|_| CampsiteError::InvalidDayOfWeek { name: name.into() })
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CampsiteError::InvalidDate {
        reason: format!("'{value}' is not a valid calendar date, expected YYYY-MM-DD"),
    })
}

/// Render a date the way the search form and booking links expect it,
/// e.g. "Fri Jun 02 2023".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

fn add_nights(date: NaiveDate, nights: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(nights)))
        .ok_or_else(|| CampsiteError::InvalidDate {
            reason: format!("{date} + {nights} nights overflows the calendar"),
        })
}
