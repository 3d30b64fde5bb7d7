use pretty_assertions::assert_eq;
use wzmap_core::DictionaryLookup;
use wzmap_index::load_from_json;

#[test]
fn test_load_fixture_dictionary() {
    let json = include_str!("../fixtures/wz-code-map.json");
    let index = load_from_json(json).expect("Failed to parse fixture");

    assert!(!index.is_empty());
    assert!(
        index.empty_rule_sets().is_empty(),
        "fixture contains classes without declarations: {:?}",
        index.empty_rule_sets()
    );

    // 配置顺序即匹配顺序
    assert_eq!(&index.classes()[..3], &["wz-fs-12", "wz-fs-14", "wz-fs-16"]);

    let rules: Vec<&str> = index.lookup("wz-flex-center").unwrap().iter().collect();
    assert_eq!(
        rules,
        vec!["display:flex", "justify-content:center", "align-items:center"]
    );
}

#[test]
fn test_fixture_box_classes_follow_naming() {
    let json = include_str!("../fixtures/wz-code-map.json");
    let index = load_from_json(json).expect("Failed to parse fixture");

    for (prefix, property) in [("p", "padding"), ("m", "margin")] {
        for side in ["t", "r", "b", "l", "tb", "lr"] {
            let class = format!("wz-{}{}-8", prefix, side);
            assert!(index.contains_class(&class), "missing {}", class);
            let rules = index.lookup(&class).unwrap();
            assert!(rules.iter().all(|r| r.starts_with(property)));
        }
    }
}
