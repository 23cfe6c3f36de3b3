pub mod dates {
    use std::sync::LazyLock;

    use chrono::{Local, NaiveDate};
    use regex::{Captures, Regex};

    use crate::constants::constants::UNCONFIRMED_DATE;
    use crate::errors::errors::DateError;

    /// Source of "today", so comparisons can be pinned in tests.
    pub trait Clock {
        fn today(&self) -> NaiveDate;
    }

    pub struct SystemClock;

    impl Clock for SystemClock {
        fn today(&self) -> NaiveDate {
            Local::now().date_naive()
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    type Build = fn(&Captures) -> Option<(i32, u32, u32)>;

    /// Accepted layouts for a normalized date, tried in order.
    static LAYOUTS: LazyLock<Vec<(Regex, Build)>> = LazyLock::new(|| {
        vec![
            // 15/01/2025
            (
                Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").unwrap(),
                day_month_year as Build,
            ),
            // 15/01/25
            (
                Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2})$").unwrap(),
                day_month_short_year as Build,
            ),
            // 01/2025
            (
                Regex::new(r"^([0-9]{1,2})/([0-9]{4})$").unwrap(),
                month_year as Build,
            ),
        ]
    });

    fn day_month_year(caps: &Captures) -> Option<(i32, u32, u32)> {
        Some((number(caps, 3)?, number(caps, 2)?, number(caps, 1)?))
    }

    fn day_month_short_year(caps: &Captures) -> Option<(i32, u32, u32)> {
        let year: i32 = number(caps, 3)?;
        let century = if year <= 68 { 2000 } else { 1900 };
        Some((century + year, number(caps, 2)?, number(caps, 1)?))
    }

    fn month_year(caps: &Captures) -> Option<(i32, u32, u32)> {
        Some((number(caps, 2)?, number(caps, 1)?, 1))
    }

    fn number<T: std::str::FromStr>(caps: &Captures, group: usize) -> Option<T> {
        caps.get(group)?.as_str().parse().ok()
    }

    /// A day range such as `15-17/01/2025` is compared on its first day.
    fn first_day_of_range(s: &str) -> String {
        match (s.find('-'), s.find('/')) {
            (Some(dash), Some(slash)) => format!("{}{}", &s[..dash], &s[slash..]),
            _ => s.to_string(),
        }
    }

    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        if s == UNCONFIRMED_DATE {
            return Err(DateError::Unconfirmed);
        }
        if s.is_empty() {
            return Err(DateError::Empty);
        }

        let s = first_day_of_range(s);
        for (layout, build) in LAYOUTS.iter() {
            let Some(caps) = layout.captures(&s) else {
                continue;
            };
            let date = build(&caps)
                .filter(|&(year, _, _)| year >= 1)
                .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day));
            return match date {
                Some(date) => Ok(date),
                None => Err(DateError::OutOfRange(s.clone())),
            };
        }

        Err(DateError::Unrecognized(s))
    }

    pub fn is_future(s: &str) -> bool {
        is_future_at(s, &SystemClock)
    }

    /// Keeps anything that is not provably in the past.
    pub fn is_future_at(s: &str, clock: &dyn Clock) -> bool {
        if s == UNCONFIRMED_DATE {
            return true;
        }

        match parse_date(s) {
            Ok(date) => date >= clock.today(),
            Err(err) => {
                tracing::debug!("keeping event with unreadable date: {}", err);
                true
            }
        }
    }

}
