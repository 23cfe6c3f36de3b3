pub mod extract {
    use std::sync::LazyLock;

    use chrono::Datelike;
    use regex::{Captures, Regex};

    use crate::dates::dates::{Clock, SystemClock};
    use crate::months::months::{alternation, month_number};

    /// Normalizes one match; `None` skips it and the search goes on.
    type Render = fn(&str, &Captures, i32) -> Option<String>;

    /// One way of writing a date, and how to normalize it.
    struct Family {
        name: &'static str,
        pattern: Regex,
        render: Render,
    }

    impl Family {
        fn new(name: &'static str, pattern: &str, render: Render) -> Family {
            Family {
                name,
                pattern: Regex::new(pattern).unwrap(),
                render,
            }
        }
    }

    const WEEKDAYS: &str = "(?:lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche)";

    // du 15 au 17 janvier 2025
    static DAY_RANGE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!(
            r"du\s+(\d{{1,2}})\s+au\s+(\d{{1,2}})\s+({})\s+(\d{{4}})",
            alternation()
        ))
        .unwrap()
    });

    static FAMILIES: LazyLock<Vec<Family>> = LazyLock::new(|| {
        let months = alternation();
        vec![
            // 15 janvier 2025, 15 janvier
            Family::new(
                "day month",
                &format!(r"(\d{{1,2}})\s+({})(?:\s+(\d{{4}}))?", months),
                day_month,
            ),
            Family {
                name: "day range",
                pattern: DAY_RANGE.clone(),
                render: day_range,
            },
            // 15/01/2025, 15-01-2025, 15.01.25
            Family::new(
                "numeric",
                r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})",
                numeric,
            ),
            // 2025-01-15
            Family::new("iso", r"(\d{4})[/\-](\d{1,2})[/\-](\d{1,2})", iso),
            // samedi 15 janvier
            Family::new(
                "weekday",
                &format!(r"{}\s+(\d{{1,2}})\s+({})(?:\s+(\d{{4}}))?", WEEKDAYS, months),
                weekday,
            ),
        ]
    });

    fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
        caps.get(index).map(|m| m.as_str())
    }

    fn year_or(caps: &Captures, index: usize, current_year: i32) -> String {
        group(caps, index)
            .map(str::to_string)
            .unwrap_or_else(|| current_year.to_string())
    }

    fn day_range(_: &str, caps: &Captures, _: i32) -> Option<String> {
        let month = month_number(group(caps, 3)?)?;
        Some(format!(
            "{}-{}/{}/{}",
            group(caps, 1)?,
            group(caps, 2)?,
            month,
            group(caps, 4)?
        ))
    }

    fn day_month(text: &str, caps: &Captures, current_year: i32) -> Option<String> {
        // "17 janvier 2025" closing "du 15 au 17 janvier 2025" stands for the range.
        let end = caps.get(0)?.end();
        if let Some(range) = DAY_RANGE
            .captures_iter(text)
            .find(|range| range.get(0).map(|m| m.end()) == Some(end))
        {
            return day_range(text, &range, current_year);
        }

        let month = month_number(group(caps, 2)?)?;
        let year = year_or(caps, 3, current_year);
        Some(match group(caps, 1) {
            Some(day) => format!("{}/{}/{}", day, month, year),
            None => format!("{}/{}", month, year),
        })
    }

    /// True when the match is the tail of a `YYYY-MM-DD` date, e.g. the
    /// `25-01-15` inside `2025-01-15`.
    fn is_iso_tail(text: &str, caps: &Captures) -> bool {
        let (Some(day), Some(month), Some(year)) = (caps.get(1), caps.get(2), caps.get(3)) else {
            return false;
        };
        let leading = text[..day.start()]
            .chars()
            .rev()
            .take_while(|c| c.is_numeric())
            .count();
        let dotted = &text[day.end()..month.start()] == "."
            || &text[month.end()..year.start()] == ".";

        leading > 0
            && leading + day.as_str().chars().count() >= 4
            && year.as_str().chars().count() <= 2
            && !dotted
    }

    fn numeric(text: &str, caps: &Captures, _: i32) -> Option<String> {
        if is_iso_tail(text, caps) {
            return None;
        }
        Some(format!(
            "{}/{}/{}",
            group(caps, 1)?,
            group(caps, 2)?,
            group(caps, 3)?
        ))
    }

    fn iso(_: &str, caps: &Captures, _: i32) -> Option<String> {
        Some(format!(
            "{}/{}/{}",
            group(caps, 3)?,
            group(caps, 2)?,
            group(caps, 1)?
        ))
    }

    fn weekday(_: &str, caps: &Captures, current_year: i32) -> Option<String> {
        let month = month_number(group(caps, 2)?)?;
        Some(format!(
            "{}/{}/{}",
            group(caps, 1)?,
            month,
            year_or(caps, 3, current_year)
        ))
    }

    pub fn extract_date(text: &str) -> Option<String> {
        extract_date_at(text, &SystemClock)
    }

    /// Normalizes the first date found in `text`; a missing year is taken
    /// from `clock`.
    pub fn extract_date_at(text: &str, clock: &dyn Clock) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        let text = text.to_lowercase();
        let current_year = clock.today().year();

        FAMILIES.iter().find_map(|family| {
            family.pattern.captures_iter(&text).find_map(|caps| {
                let date = (family.render)(&text, &caps, current_year)?;
                tracing::trace!("{} pattern matched {:?} -> {}", family.name, &caps[0], date);
                Some(date)
            })
        })
    }

}
