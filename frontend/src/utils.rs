use chrono::{DateTime, NaiveDate, NaiveDateTime};

const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Formats a timestamp as e.g. "March 5, 2024". Unparseable input is returned unchanged.
pub fn format_long_date(timestamp: &str) -> String {
    let timestamp = timestamp.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(timestamp) {
        return datetime.format(LONG_DATE_FORMAT).to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S") {
        return datetime.format(LONG_DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
        return date.format(LONG_DATE_FORMAT).to_string();
    }
    timestamp.to_string()
}

/// Swaps YouTube's default thumbnail for the high-quality variant.
pub fn hq_thumbnail_url(url: &str) -> String {
    url.replacen("/default", "/hqdefault", 1)
        .replacen("/default_live", "/hqdefault_live", 1)
}

/// Groups digits in threes, e.g. `12500` becomes `"12,500"`.
pub fn format_number(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.as_bytes().iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_from_rfc3339() {
        assert_eq!(format_long_date("2024-03-05T10:00:00Z"), "March 5, 2024");
        assert_eq!(format_long_date("2023-12-31T23:59:59+00:00"), "December 31, 2023");
    }

    #[test]
    fn long_date_from_sql_timestamp() {
        assert_eq!(format_long_date("2021-07-14 08:30:00"), "July 14, 2021");
        assert_eq!(format_long_date("2021-07-14"), "July 14, 2021");
    }

    #[test]
    fn unparseable_date_is_kept() {
        assert_eq!(format_long_date("yesterday"), "yesterday");
    }

    #[test]
    fn default_thumbnail_becomes_hq() {
        assert_eq!(
            hq_thumbnail_url("https://i.ytimg.com/vi/abc123/default.jpg"),
            "https://i.ytimg.com/vi/abc123/hqdefault.jpg"
        );
    }

    #[test]
    fn live_thumbnail_becomes_hq_live() {
        assert_eq!(
            hq_thumbnail_url("https://i.ytimg.com/vi/abc123/default_live.jpg"),
            "https://i.ytimg.com/vi/abc123/hqdefault_live.jpg"
        );
    }

    #[test]
    fn other_thumbnails_are_untouched() {
        assert_eq!(
            hq_thumbnail_url("https://i.ytimg.com/vi/abc123/mqdefault.jpg"),
            "https://i.ytimg.com/vi/abc123/mqdefault.jpg"
        );
    }

    #[test]
    fn numbers_are_grouped() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(10), "10");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
