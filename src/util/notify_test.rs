use super::*;

#[test]
fn export_alert_is_bilingual() {
    let (chinese, english) = EXPORT_FAILED_ALERT.split_once('\n').unwrap();
    assert!(chinese.contains("PDF 生成失败"));
    assert_eq!(english, "Export failed.");
}
