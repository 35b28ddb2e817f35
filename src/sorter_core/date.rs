use crate::sorter_core::error::DateError;
use crate::sorter_core::exif::MetadataRecord;
use regex::Regex;
use std::sync::LazyLock;
use time::{Date, Month};

/// ISO calendar date, `YYYY-MM-DD`.
const ISO_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]-[month]-[day]");

/// `YYYYMMDD` framed by `-` or `_`, ASCII digits only. The leading `.*` makes
/// the last token in a name win.
static FILENAME_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*[-_]([0-9]{4}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01]))[-_]").unwrap()
});

/// Where a resolved date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Filename,
    Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: Date,
    pub source: DateSource,
}

impl ResolvedDate {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> Month {
        self.date.month()
    }
}

/// Extract a `YYYY-MM-DD` string from a date token embedded in a file name.
pub fn date_from_filename(file_name: &str) -> Option<String> {
    let token = FILENAME_DATE_RE.captures(file_name)?.get(1)?.as_str();
    Some(format!("{}-{}-{}", &token[..4], &token[4..6], &token[6..8]))
}

/// Turn an exiftool date (`YYYY:MM:DD HH:MM:SS`) into `YYYY-MM-DD`.
pub fn date_from_tag_value(value: &str) -> String {
    value
        .trim()
        .split(' ')
        .next()
        .unwrap_or_default()
        .replace(':', "-")
}

/// Parse a strict ISO calendar date.
pub fn parse_iso_date(date_str: &str) -> Result<Date, DateError> {
    if !is_iso_shaped(date_str) {
        return Err(DateError::Malformed(date_str.to_string()));
    }

    Date::parse(date_str, ISO_DATE_FORMAT).map_err(|_| DateError::Invalid(date_str.to_string()))
}

fn is_iso_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Determine a file's date: a date token in the file name wins, otherwise the
/// `date_tag` value of its metadata record is used.
pub fn resolve_date(
    file_name: &str,
    record: &MetadataRecord,
    date_tag: &str,
) -> Result<ResolvedDate, DateError> {
    if let Some(date_str) = date_from_filename(file_name) {
        let date = parse_iso_date(&date_str)?;
        return Ok(ResolvedDate {
            date,
            source: DateSource::Filename,
        });
    }

    let value = record
        .tag_str(date_tag)
        .ok_or_else(|| DateError::MissingTag(date_tag.to_string()))?;
    let date = parse_iso_date(&date_from_tag_value(value))?;

    Ok(ResolvedDate {
        date,
        source: DateSource::Tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: &str = "EXIF:DateTimeOriginal";

    fn record_with_tag(value: &str) -> MetadataRecord {
        MetadataRecord::from_pairs([("SourceFile", "/src/file.jpg"), (TAG, value)])
    }

    #[test]
    fn test_date_from_filename() {
        assert_eq!(
            date_from_filename("photo-20210615-x.jpg"),
            Some("2021-06-15".to_string())
        );
        assert_eq!(
            date_from_filename("IMG_20190101_120000.jpg"),
            Some("2019-01-01".to_string())
        );
        assert_eq!(
            date_from_filename("VID-20231231_001.mp4"),
            Some("2023-12-31".to_string())
        );
    }

    #[test]
    fn test_date_from_filename_requires_separators() {
        assert_eq!(date_from_filename("20210615.jpg"), None);
        assert_eq!(date_from_filename("photo-20210615.jpg"), None);
        assert_eq!(date_from_filename("photo20210615-x.jpg"), None);
        assert_eq!(date_from_filename("photo-2021061-x.jpg"), None);
    }

    #[test]
    fn test_date_from_filename_month_and_day_ranges() {
        assert_eq!(date_from_filename("a-20211315-b.jpg"), None);
        assert_eq!(date_from_filename("a-20210015-b.jpg"), None);
        assert_eq!(date_from_filename("a-20210632-b.jpg"), None);
        assert_eq!(date_from_filename("a-20210600-b.jpg"), None);
        // Only the ranges are checked, not the calendar.
        assert_eq!(
            date_from_filename("a-20210230-b.jpg"),
            Some("2021-02-30".to_string())
        );
    }

    #[test]
    fn test_date_from_filename_ignores_non_ascii_digits() {
        assert_eq!(date_from_filename("写真-２０２１0615-x.jpg"), None);
        assert_eq!(date_from_filename("a-٢٠٢١0615-b.jpg"), None);
        assert_eq!(
            date_from_filename("写真-20210615-x.jpg"),
            Some("2021-06-15".to_string())
        );
    }

    #[test]
    fn test_date_from_filename_last_token_wins() {
        assert_eq!(
            date_from_filename("x_20200101_y_20210202_z.jpg"),
            Some("2021-02-02".to_string())
        );
    }

    #[test]
    fn test_date_from_tag_value() {
        assert_eq!(date_from_tag_value("2019:12:25 10:00:00"), "2019-12-25");
        assert_eq!(date_from_tag_value("2019:12:25"), "2019-12-25");
        assert_eq!(date_from_tag_value(""), "");
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2019-12-25").unwrap();
        assert_eq!(date.year(), 2019);
        assert_eq!(date.month(), Month::December);
        assert_eq!(date.day(), 25);
    }

    #[test]
    fn test_parse_iso_date_errors() {
        assert_eq!(
            parse_iso_date("9999-99-99"),
            Err(DateError::Invalid("9999-99-99".to_string()))
        );
        assert_eq!(
            parse_iso_date("2021-02-30"),
            Err(DateError::Invalid("2021-02-30".to_string()))
        );
        assert_eq!(
            parse_iso_date("0000-00-00"),
            Err(DateError::Invalid("0000-00-00".to_string()))
        );
        assert_eq!(
            parse_iso_date("2019-1-5"),
            Err(DateError::Malformed("2019-1-5".to_string()))
        );
        assert_eq!(
            parse_iso_date(""),
            Err(DateError::Malformed(String::new()))
        );
    }

    #[test]
    fn test_parse_iso_date_leap_year() {
        assert!(parse_iso_date("2020-02-29").is_ok());
        assert!(parse_iso_date("2021-02-29").is_err());
    }

    #[test]
    fn test_filename_wins_over_tag() {
        let record = record_with_tag("2020:01:01 00:00:00");
        let resolved = resolve_date("photo-20210615-x.jpg", &record, TAG).unwrap();
        assert_eq!(resolved.source, DateSource::Filename);
        assert_eq!(resolved.year(), 2021);
        assert_eq!(resolved.month(), Month::June);
        assert_eq!(resolved.date.day(), 15);
    }

    #[test]
    fn test_tag_fallback() {
        let record = record_with_tag("2019:12:25 10:00:00");
        let resolved = resolve_date("IMG_0001.jpg", &record, TAG).unwrap();
        assert_eq!(resolved.source, DateSource::Tag);
        assert_eq!(resolved.year(), 2019);
        assert_eq!(resolved.month(), Month::December);
    }

    #[test]
    fn test_missing_tag() {
        let record = MetadataRecord::from_pairs([("SourceFile", "/src/IMG_0001.jpg")]);
        assert_eq!(
            resolve_date("IMG_0001.jpg", &record, TAG),
            Err(DateError::MissingTag(TAG.to_string()))
        );
    }

    #[test]
    fn test_invalid_tag_value() {
        let record = record_with_tag("9999:99:99 00:00:00");
        assert!(matches!(
            resolve_date("IMG_0001.jpg", &record, TAG),
            Err(DateError::Invalid(_))
        ));
    }

    #[test]
    fn test_invalid_filename_date_does_not_fall_back() {
        let record = record_with_tag("2019:12:25 10:00:00");
        assert_eq!(
            resolve_date("scan-20210230-x.jpg", &record, TAG),
            Err(DateError::Invalid("2021-02-30".to_string()))
        );
    }
}
