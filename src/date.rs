use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month};

pub const DEFAULT_DEADLINE_DAYS: i64 = 7;

#[cfg(target_arch = "wasm32")]
pub fn today() -> Date {
    let now = js_sys::Date::new_0();
    let month = Month::try_from(now.get_month() as u8 + 1).unwrap_or(Month::January);
    Date::from_calendar_date(now.get_full_year() as i32, month, now.get_date() as u8)
        .unwrap_or(Date::MIN)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn default_deadline(today: Date) -> Date {
    today.saturating_add(Duration::days(DEFAULT_DEADLINE_DAYS))
}

/// Earliest deadline the order form accepts.
pub fn earliest_deadline(today: Date) -> Date {
    today.next_day().unwrap_or(today)
}

/// `<input type="date">` wire format.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LONG_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

pub fn format_iso(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

pub fn parse_iso(value: &str) -> Option<Date> {
    Date::parse(value.trim(), ISO_DATE).ok()
}

pub fn format_long(date: Date) -> String {
    date.format(LONG_DATE).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    #[test]
    fn default_deadline_is_a_week_out() {
        assert_eq!(
            default_deadline(date(2026, Month::December, 28)),
            date(2027, Month::January, 4)
        );
    }

    #[test]
    fn earliest_deadline_is_tomorrow() {
        assert_eq!(
            earliest_deadline(date(2026, Month::February, 28)),
            date(2026, Month::March, 1)
        );
    }

    #[test]
    fn iso_dates_parse_and_format() {
        let parsed = parse_iso("2026-03-09").unwrap();
        assert_eq!(parsed, date(2026, Month::March, 9));
        assert_eq!(format_iso(parsed), "2026-03-09");
        assert_eq!(parse_iso("2026-02-30"), None);
        assert_eq!(parse_iso("2026-03"), None);
        assert_eq!(parse_iso("2026-03-09-01"), None);
        assert_eq!(parse_iso(""), None);
    }

    #[test]
    fn only_zero_padded_iso_dates_parse() {
        assert_eq!(parse_iso("+2026-3-9"), None);
        assert_eq!(parse_iso("02026-03-09"), None);
        assert_eq!(parse_iso("2026-3-09"), None);
        assert_eq!(parse_iso("2026/03/09"), None);
        assert_eq!(parse_iso(" 2026-03-09 "), Some(date(2026, Month::March, 9)));
    }

    #[test]
    fn long_format_spells_the_month() {
        assert_eq!(format_long(date(2026, Month::October, 26)), "October 26, 2026");
        assert_eq!(format_long(date(2027, Month::January, 4)), "January 4, 2027");
    }
}
