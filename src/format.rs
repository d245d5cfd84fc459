//! Spanish (es-ES) presentation of numbers and dates.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Thousands grouped with `.`. Spanish only groups from five digits up, so
/// `1000` stays `1000` while `10000` becomes `10.000`.
pub fn count(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() < 5 {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `"2024-03-15"` (or a full RFC 3339 timestamp) as `"marzo de 2024"`.
pub fn month_year(raw: &str) -> Option<String> {
    let date = parse_date(raw)?;
    let month = MONTHS[date.month0() as usize];
    Some(format!("{month} de {}", date.year()))
}

/// Short numeric date, `d/m/yyyy`.
pub fn short_date(at: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", at.day(), at.month(), at.year())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn counts_group_from_five_digits() {
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(1000), "1000");
        assert_eq!(count(9999), "9999");
        assert_eq!(count(10000), "10.000");
        assert_eq!(count(1234567), "1.234.567");
    }

    #[test]
    fn month_year_accepts_dates_and_timestamps() {
        assert_eq!(month_year("2024-03-15").as_deref(), Some("marzo de 2024"));
        assert_eq!(
            month_year("2023-12-01T10:00:00.000Z").as_deref(),
            Some("diciembre de 2023")
        );
        assert_eq!(month_year("not a date"), None);
    }

    #[test]
    fn short_date_has_no_padding() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(short_date(&at), "5/1/2025");
    }
}
