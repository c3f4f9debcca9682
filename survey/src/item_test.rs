use super::*;

fn item(id: &str) -> ChecklistItem {
    ChecklistItem::new(id, "cat", format!("label {id}"))
}

#[test]
fn builtin_catalog_parses_and_is_non_empty() {
    let catalog = Catalog::builtin().expect("embedded catalog should parse");
    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), catalog.items().len());
}

#[test]
fn builtin_catalog_ids_are_unique() {
    let catalog = Catalog::builtin().unwrap();
    let ids: HashSet<&str> = catalog.ids().collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn new_preserves_order() {
    let catalog = Catalog::new(vec![item("b"), item("a"), item("c")]).unwrap();
    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
    assert_eq!(catalog.get(1).map(|i| i.id.as_str()), Some("a"));
    assert_eq!(catalog.get(3), None);
}

#[test]
fn new_rejects_duplicate_ids() {
    let err = Catalog::new(vec![item("a"), item("b"), item("a")]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));
}

#[test]
fn new_rejects_blank_ids() {
    let err = Catalog::new(vec![item("a"), item("  ")]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyId { index: 1 }));
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn from_json_reads_items() {
    let catalog = Catalog::from_json(
        r#"[{"id":"a","category":"Cat","label":"A"},{"id":"b","category":"Cat","label":"B"}]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.items()[0], ChecklistItem::new("a", "Cat", "A"));
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = Catalog::from_json(r#"{"id":"a"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
}
