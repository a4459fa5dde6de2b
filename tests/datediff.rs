use chrono::NaiveDate;
use datediff::{Date, DateDiff, ErrorKind, Field, datediff};

/// Same calculation done with chrono, formatted the way `datediff` formats it.
fn expected(first: &str, second: &str) -> String {
    let a = NaiveDate::parse_from_str(first, "%d %m %Y").unwrap();
    let b = NaiveDate::parse_from_str(second, "%d %m %Y").unwrap();
    let days = (a - b).num_days().abs();
    format!(
        "{}, {}, {days}",
        a.min(b).format("%d %m %Y"),
        a.max(b).format("%d %m %Y")
    )
}

fn check(first: &str, second: &str) {
    assert_eq!(
        datediff(&format!("{first}, {second}")).unwrap(),
        expected(first, second)
    );
}

#[test]
fn with_leading_zeroes() {
    check("11 11 1918", "01 09 1939");
    assert_eq!(
        datediff("11 11 1918, 01 09 1939").unwrap(),
        "11 11 1918, 01 09 1939, 7599"
    );
}

#[test]
fn without_leading_zeroes() {
    check("1 3 1995", "5 4 2000");
    assert_eq!(
        datediff("1 3 1995, 5 4 2000").unwrap(),
        "01 03 1995, 05 04 2000, 1862"
    );
}

#[test]
fn two_dates_one_day_apart() {
    check("24 12 2002", "25 12 2002");
}

#[test]
fn two_dates_on_the_same_day() {
    check("26 1 2005", "26 1 2005");
    assert_eq!(
        datediff("26 1 2005, 26 1 2005").unwrap(),
        "26 01 2005, 26 01 2005, 0"
    );
}

#[test]
fn later_date_given_first() {
    check("05 07 2008", "06 06 2008");
    assert_eq!(
        datediff("05 07 2008, 06 06 2008").unwrap(),
        "06 06 2008, 05 07 2008, 29"
    );
}

#[test]
fn across_leap_days_and_centuries() {
    check("28 2 1900", "1 3 1900");
    check("28 2 2000", "1 3 2000");
    check("1 1 1900", "31 12 9999");
    check("29 2 2024", "1 1 1970");
}

#[test]
fn difference_is_symmetric() {
    let pairs = [
        ("11 11 1918", "01 09 1939"),
        ("31 12 1999", "1 1 2000"),
        ("15 8 1947", "26 1 1950"),
    ];
    for (a, b) in pairs {
        let forward: DateDiff = format!("{a}, {b}").parse().unwrap();
        let backward: DateDiff = format!("{b}, {a}").parse().unwrap();
        assert_eq!(forward, backward);
    }
}

#[test]
fn day_count_matches_reference_calendar() {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let mut day = epoch;
    let end = NaiveDate::from_ymd_opt(2101, 1, 1).unwrap();
    while day < end {
        let text = day.format("%d %m %Y").to_string();
        let parsed: Date = text.parse().unwrap();
        let reference = (day - epoch).num_days();
        assert_eq!(i64::from(parsed.day_count()), reference, "{text}");
        assert_eq!(parsed.epoch_days(), reference, "{text}");
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn non_leap_february_29_is_invalid() {
    let err = datediff("01 01 2009, 29 2 2009").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDate);
}

#[test]
fn month_out_of_range() {
    let err = datediff("1 15 2009, 5 15 2009").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some(Field::Month));
}

#[test]
fn single_token_segment_is_format_error() {
    let err = datediff("1991, 05 10 2002").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn placeholder_text_is_format_error() {
    let err = datediff("DD MM YYYY, 01 01 2000").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn missing_second_date() {
    assert_eq!(datediff("01 01 2000").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(datediff("01 01 2000,").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(datediff("").unwrap_err().kind(), ErrorKind::Format);
}
