//! Display helpers shared by both flows.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Long Indonesian date-time, e.g. `15 Januari 2024 pukul 09.30`.
pub fn format_long_date(timestamp: &DateTime<Utc>, offset: FixedOffset) -> String {
    let local = timestamp.with_timezone(&offset);
    format!(
        "{} {} {} pukul {:02}.{:02}",
        local.day(),
        MONTHS_ID[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute()
    )
}

/// Short numeric date-time used in the listing table, e.g. `15/1/2024, 09.30.00`.
pub fn format_short_date(timestamp: &DateTime<Utc>, offset: FixedOffset) -> String {
    let local = timestamp.with_timezone(&offset);
    format!(
        "{}/{}/{}, {:02}.{:02}.{:02}",
        local.day(),
        local.month(),
        local.year(),
        local.hour(),
        local.minute(),
        local.second()
    )
}

/// Escapes text for inclusion in markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Optional field, or the "-" placeholder when absent or blank.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_long_date() {
        let ts: DateTime<Utc> = "2024-01-15T09:30:00Z".parse().unwrap();
        let text = format_long_date(&ts, utc());
        assert_eq!(text, "15 Januari 2024 pukul 09.30");
        assert!(text.contains("15"));
        assert!(text.contains("Januari"));
        assert!(text.contains("2024"));
        assert!(text.contains("09.30"));
    }

    #[test]
    fn test_long_date_shifts_into_display_zone() {
        let ts: DateTime<Utc> = "2024-12-31T20:05:00Z".parse().unwrap();
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_long_date(&ts, wib), "1 Januari 2025 pukul 03.05");
    }

    #[test]
    fn test_short_date() {
        let ts: DateTime<Utc> = "2024-08-17T10:04:09Z".parse().unwrap();
        assert_eq!(format_short_date(&ts, utc()), "17/8/2024, 10.04.09");
    }

    #[test]
    fn test_escape_and_placeholder() {
        assert_eq!(escape_html("<b>Mie & \"Es\"</b>"), "&lt;b&gt;Mie &amp; &quot;Es&quot;&lt;/b&gt;");
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("QRIS")), "QRIS");
    }
}
