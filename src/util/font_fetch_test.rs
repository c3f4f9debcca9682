use super::*;

#[test]
fn timeout_millis_converts_seconds() {
    assert_eq!(timeout_millis(Duration::from_secs(15)), 15_000);
    assert_eq!(timeout_millis(Duration::from_millis(250)), 250);
}

#[test]
fn timeout_millis_saturates() {
    assert_eq!(timeout_millis(Duration::MAX), u64::MAX);
}

#[test]
fn only_2xx_statuses_succeed() {
    assert!(is_success_status(200));
    assert!(is_success_status(204));
    assert!(!is_success_status(304));
    assert!(!is_success_status(404));
    assert!(!is_success_status(500));
}
