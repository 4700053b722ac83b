use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use rstest::rstest;
use sked_core::calendar::{format_date, parse_date};
use sked_core::error::{CoreError, RuleField};
use sked_core::models::Task;
use sked_core::normalize::normalize;
use sked_core::recurrence::next_date;

fn date(text: &str) -> NaiveDate {
    parse_date(text).expect("test date must be valid")
}

/// Dates between 1970-01-01 and roughly 2134.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..60_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

#[rstest]
#[case("20240101", "20240101", "d 1", "20240102")]
#[case("20240115", "20240101", "m -1", "20240131")]
#[case("20240101", "20240101", "w 3,5", "20240103")]
#[case("20250101", "20240229", "y", "20250301")]
#[case("20240305", "20240305", "y", "20250305")]
#[case("20240601", "20240501", "d 7", "20240605")]
#[case("20240126", "20240101", "m 1,-2 2", "20240201")]
#[case("20240229", "20240101", "m -1 2", "20250228")]
#[case("20240101", "20231231", "w 7", "20240107")]
#[case("20300101", "20240101", "", "20240101")]
fn test_next_date_cases(#[case] now: &str, #[case] anchor: &str, #[case] rule: &str, #[case] expected: &str) {
    assert_eq!(next_date(date(now), anchor, rule).unwrap(), expected);
}

#[rstest]
#[case("d 401", RuleField::Interval, "401")]
#[case("w 8", RuleField::Weekday, "8")]
#[case("m 32", RuleField::MonthDay, "32")]
#[case("m 1 13", RuleField::Month, "13")]
fn test_out_of_range_values(#[case] rule: &str, #[case] field: RuleField, #[case] token: &str) {
    assert_eq!(
        next_date(date("20240101"), "20240101", rule),
        Err(CoreError::InvalidRuleValue {
            field,
            token: token.to_string()
        })
    );
}

#[test]
fn test_rule_errors_checked_after_date() {
    assert_eq!(
        next_date(date("20240101"), "20241301", "d 401"),
        Err(CoreError::InvalidDate("20241301".to_string()))
    );
}

#[test]
fn test_normalize_new_task_without_date() {
    let mut task = Task {
        title: "Read a book".to_string(),
        ..Default::default()
    };
    normalize(&mut task, date("20240601").and_hms_opt(9, 0, 0).unwrap()).unwrap();
    assert_eq!(task.date, "20240601");
}

#[test]
fn test_normalize_overdue_recurring_task() {
    let mut task = Task {
        date: "20240501".to_string(),
        title: "Backup".to_string(),
        repeat: "d 7".to_string(),
        ..Default::default()
    };
    normalize(&mut task, date("20240601").and_hms_opt(23, 59, 0).unwrap()).unwrap();

    let stored = date(&task.date);
    let elapsed = (stored - date("20240501")).num_days();
    assert_eq!(elapsed % 7, 0);
    assert!(stored >= date("20240601"));
}

proptest! {
    #[test]
    fn prop_every_n_days_is_smallest_step_not_before_now(
        anchor in any_date(),
        now in any_date(),
        n in 1u32..=400,
    ) {
        let result = date(&next_date(now, &format_date(anchor), &format!("d {n}")).unwrap());
        let elapsed = (result - anchor).num_days();

        prop_assert!(elapsed >= i64::from(n));
        prop_assert_eq!(elapsed % i64::from(n), 0);
        prop_assert!(result >= now);
        // One step earlier is either the anchor itself or before now.
        let previous = result - chrono::Duration::days(i64::from(n));
        prop_assert!(previous == anchor || previous < now);
    }

    #[test]
    fn prop_empty_rule_returns_anchor(anchor in any_date(), now in any_date()) {
        let text = format_date(anchor);
        prop_assert_eq!(next_date(now, &text, "").unwrap(), text);
    }

    #[test]
    fn prop_yearly_from_anchor_is_one_year_later(anchor in any_date()) {
        prop_assume!(!(anchor.month() == 2 && anchor.day() == 29));
        let result = date(&next_date(anchor, &format_date(anchor), "y").unwrap());
        prop_assert_eq!(result, anchor.with_year(anchor.year() + 1).unwrap());
    }

    #[test]
    fn prop_weekly_lands_on_listed_weekday(
        anchor in any_date(),
        now in any_date(),
        days in proptest::collection::btree_set(1u32..=7, 1..=3),
    ) {
        let list = days.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
        let result = date(&next_date(now, &format_date(anchor), &format!("w {list}")).unwrap());

        prop_assert!(days.contains(&result.weekday().number_from_monday()));
        prop_assert!(result >= now);
        prop_assert!(result >= anchor);
    }

    #[test]
    fn prop_monthly_result_is_after_now(
        anchor in any_date(),
        now in any_date(),
        day in prop_oneof![Just(-2i32), Just(-1i32), 1i32..=28],
    ) {
        let result = date(&next_date(now, &format_date(anchor), &format!("m {day}")).unwrap());
        prop_assert!(result > now);
    }

    #[test]
    fn prop_results_round_trip_as_anchors(
        anchor in any_date(),
        now in any_date(),
        rule in prop_oneof![
            Just("d 3"), Just("y"), Just("w 2,6"), Just("m 15,-1"), Just("m 1 1,7"),
        ],
    ) {
        let first = next_date(now, &format_date(anchor), rule).unwrap();
        prop_assert_eq!(format_date(date(&first)), first.clone());
        prop_assert!(next_date(now, &first, rule).is_ok());
    }
}
