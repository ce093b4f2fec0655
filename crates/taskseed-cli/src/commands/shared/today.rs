use chrono::{Local, NaiveDate};

/// Compute the reference date with precedence: flag -> config -> fallback.
#[must_use]
pub fn effective_today(
    flag: Option<NaiveDate>,
    configured: Option<NaiveDate>,
    fallback: NaiveDate,
) -> NaiveDate {
    flag.or(configured).unwrap_or(fallback)
}

/// The local calendar date.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::effective_today;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_today(Some(d(1)), Some(d(2)), d(3)), d(1));
    }

    #[test]
    fn config_used_when_flag_missing() {
        assert_eq!(effective_today(None, Some(d(2)), d(3)), d(2));
    }

    #[test]
    fn fallback_used_when_none_set() {
        assert_eq!(effective_today(None, None, d(3)), d(3));
    }
}
