use chrono::TimeZone;

use super::*;
use crate::net::types::LoanBook;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

fn loan(id: &str, returned: bool) -> Loan {
    Loan {
        id: id.to_owned(),
        book_id: "b1".to_owned(),
        user_id: "u1".to_owned(),
        issued_at: at(1, 10),
        returned_at: returned.then(|| at(4, 9)),
        book: LoanBook { id: "b1".to_owned(), title: "Dune".to_owned(), isbn: "978".to_owned() },
        user: None,
    }
}

#[test]
fn default_filter_is_active() {
    assert_eq!(LoanFilter::default(), LoanFilter::Active);
}

#[test]
fn active_filter_hides_returned_loans() {
    let loans = vec![loan("a", false), loan("b", true), loan("c", false)];
    let visible = filter_loans(&loans, LoanFilter::Active);
    let ids: Vec<_> = visible.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn all_filter_keeps_everything() {
    let loans = vec![loan("a", false), loan("b", true)];
    assert_eq!(filter_loans(&loans, LoanFilter::All).len(), 2);
}

#[test]
fn stats_split_active_and_returned() {
    let loans = vec![loan("a", false), loan("b", true), loan("c", true)];
    assert_eq!(LoanStats::from_loans(&loans), LoanStats { total: 3, active: 1, returned: 2 });
}

#[test]
fn stats_of_empty_list_are_zero() {
    assert_eq!(LoanStats::from_loans(&[]), LoanStats::default());
}

#[test]
fn days_out_counts_whole_days() {
    assert_eq!(days_out(at(1, 10), at(1, 23)), 0);
    assert_eq!(days_out(at(1, 10), at(2, 10)), 1);
    assert_eq!(days_out(at(1, 10), at(4, 9)), 2);
}

#[test]
fn days_out_never_negative() {
    assert_eq!(days_out(at(5, 0), at(1, 0)), 0);
}

#[test]
fn format_days_pluralizes() {
    assert_eq!(format_days(0), "0 days");
    assert_eq!(format_days(1), "1 day");
    assert_eq!(format_days(12), "12 days");
}

#[test]
fn format_date_is_iso_calendar_date() {
    assert_eq!(format_date(at(9, 15)), "2024-03-09");
}

#[test]
fn empty_messages_depend_on_filter() {
    assert_eq!(empty_member_message(LoanFilter::Active), "You have no active loans. Start borrowing books!");
    assert_eq!(empty_member_message(LoanFilter::All), "No loan history yet.");
    assert_eq!(empty_admin_message(LoanFilter::All), "No loans yet.");
}
