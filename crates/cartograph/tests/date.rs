use cartograph::convert_date_time;
use chrono::NaiveDate;
use std_util::prelude::*;

#[test]
fn midnight_renders_date_only() {
    let date = assert_some!(NaiveDate::from_ymd_opt(1905, 2, 2).and_then(|d| d.and_hms_opt(0, 0, 0)));
    assert_eq!(convert_date_time(&date), "1905-02-02");
}

#[test]
fn other_times_render_date_and_time() {
    let date = assert_some!(NaiveDate::from_ymd_opt(1982, 3, 6).and_then(|d| d.and_hms_opt(9, 5, 0)));
    assert_eq!(convert_date_time(&date), "1982-03-06 09:05:00");

    let date = assert_some!(NaiveDate::from_ymd_opt(1982, 3, 6).and_then(|d| d.and_hms_opt(0, 0, 1)));
    assert_eq!(convert_date_time(&date), "1982-03-06 00:00:01");
}
