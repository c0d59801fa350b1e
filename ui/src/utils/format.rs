//! Display helpers for file metadata and backend timestamps.
//!
//! Every function here is total: missing or malformed input yields
//! [`UNKNOWN`] instead of an error.

use std::sync::LazyLock;

use jiff::{Timestamp, civil};
use regex::Regex;

use super::time::localize_timestamp;

/// Shown wherever a value is missing or cannot be interpreted.
pub const UNKNOWN: &str = "알 수 없음";

const IMAGE_EXTENSIONS: [&str; 7] =
    [".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg"];

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Whether the name ends in one of the image extensions, in any case.
pub fn is_image_file(file_name: Option<&str>) -> bool {
    let Some(file_name) = file_name else {
        return false;
    };
    let Some(dot) = file_name.rfind('.') else {
        return false;
    };
    let extension = file_name[dot..].to_lowercase();
    IMAGE_EXTENSIONS.contains(&extension.as_str())
}

/// Human readable size with at most two decimals, e.g. `1.5 KB`.
pub fn format_file_size(bytes: Option<f64>) -> String {
    let bytes = match bytes {
        Some(b) if b.is_finite() && b > 0.0 => b,
        _ => return UNKNOWN.to_string(),
    };

    let exponent = (bytes.ln() / 1024f64.ln()).floor().max(0.0) as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    // f64's Display already drops trailing zeros
    format!("{rounded} {}", SIZE_UNITS[exponent])
}

/// Korean long form date with a 12 hour clock, e.g.
/// `2024년 3월 5일 오후 02:07`.
///
/// RFC 3339 timestamps are shown in the browser's zone. Zone-less
/// date-times, which is what the backend sends, are shown as they are.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return UNKNOWN.to_string();
    };

    let datetime = if let Ok(timestamp) = date.parse::<Timestamp>() {
        localize_timestamp(timestamp).datetime()
    } else if let Ok(datetime) = date.parse::<civil::DateTime>() {
        datetime
    } else if let Ok(day) = date.parse::<civil::Date>() {
        day.to_datetime(civil::Time::midnight())
    } else {
        return UNKNOWN.to_string();
    };

    format_korean_datetime(&datetime)
}

fn format_korean_datetime(datetime: &civil::DateTime) -> String {
    let hour = datetime.hour();
    let meridiem = if hour < 12 { "오전" } else { "오후" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!(
        "{}년 {}월 {}일 {meridiem} {hour12:02}:{:02}",
        datetime.year(),
        datetime.month(),
        datetime.day(),
        datetime.minute(),
    )
}

/// Turn bare URLs into markdown links. The text is not escaped.
pub fn auto_link_urls(text: &str) -> String {
    URL_PATTERN.replace_all(text, "[$0]($0)").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_detection_uses_the_last_extension() {
        for name in [
            "a.jpg", "a.JPEG", "b.png", "c.Gif", "d.webp", "e.BMP", "f.svg",
        ] {
            assert!(is_image_file(Some(name)), "{name}");
        }
        assert!(is_image_file(Some("archive.tar.png")));
        assert!(!is_image_file(Some("photo.png.zip")));
        assert!(!is_image_file(Some("README")));
        assert!(!is_image_file(Some("notes.pdf")));
        assert!(!is_image_file(Some("")));
        assert!(!is_image_file(None));
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(None), UNKNOWN);
        assert_eq!(format_file_size(Some(0.0)), UNKNOWN);
        assert_eq!(format_file_size(Some(f64::NAN)), UNKNOWN);
        assert_eq!(format_file_size(Some(-5.0)), UNKNOWN);
        assert_eq!(format_file_size(Some(f64::INFINITY)), UNKNOWN);

        assert_eq!(format_file_size(Some(1.0)), "1 Bytes");
        assert_eq!(format_file_size(Some(500.0)), "500 Bytes");
        assert_eq!(format_file_size(Some(1024.0)), "1 KB");
        assert_eq!(format_file_size(Some(1536.0)), "1.5 KB");
        assert_eq!(format_file_size(Some(1234.0)), "1.21 KB");
        assert_eq!(format_file_size(Some(10.0 * 1024.0 * 1024.0)), "10 MB");
        assert_eq!(
            format_file_size(Some(3.0 * 1024.0 * 1024.0 * 1024.0)),
            "3 GB"
        );
        // Past the largest unit the value keeps growing in GB
        assert_eq!(
            format_file_size(Some(2048.0 * 1024.0 * 1024.0 * 1024.0)),
            "2048 GB"
        );
    }

    #[test]
    fn dates_from_the_backend() {
        assert_eq!(format_date(None), UNKNOWN);
        assert_eq!(format_date(Some("")), UNKNOWN);
        assert_eq!(format_date(Some("yesterday")), UNKNOWN);

        assert_eq!(
            format_date(Some("2024-03-05T14:07:00")),
            "2024년 3월 5일 오후 02:07"
        );
        assert_eq!(
            format_date(Some("2024-03-05T14:07:31.123456")),
            "2024년 3월 5일 오후 02:07"
        );
        assert_eq!(
            format_date(Some("2023-12-25T00:30:00")),
            "2023년 12월 25일 오전 12:30"
        );
        assert_eq!(
            format_date(Some("2023-12-25T12:00:00")),
            "2023년 12월 25일 오후 12:00"
        );
        assert_eq!(
            format_date(Some("2024-01-09")),
            "2024년 1월 9일 오전 12:00"
        );
    }

    #[test]
    fn timestamps_with_an_offset_are_localized() {
        let formatted = format_date(Some("2024-03-05T05:07:00Z"));
        assert_ne!(formatted, UNKNOWN);
        assert!(formatted.starts_with("2024년 3월"), "{formatted}");
    }

    #[test]
    fn urls_become_links() {
        assert!(
            auto_link_urls("see http://x.com now")
                .contains("[http://x.com](http://x.com)")
        );
        assert_eq!(
            auto_link_urls("https://a.io/x?y=1 and http://b.kr"),
            "[https://a.io/x?y=1](https://a.io/x?y=1) and \
             [http://b.kr](http://b.kr)"
        );
        assert_eq!(auto_link_urls("no links here"), "no links here");
        assert_eq!(auto_link_urls("ftp://x.com"), "ftp://x.com");
    }
}
