use seqkit::testing::assert_records_equal;
use seqkit::*;

fn stock() -> Record<Option<u32>> {
    [
        ("apple".to_string(), Some(3)),
        ("pear".to_string(), None),
        ("fig".to_string(), Some(0)),
        ("plum".to_string(), Some(12)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn membership() -> anyhow::Result<()> {
    let r = stock();
    assert!(includes_key(&r, "fig"));
    assert!(!includes_key(&r, "kiwi"));
    assert!(includes_value(&r, &None));
    assert!(includes_value(&r, &Some(12)));
    assert!(!includes_value(&r, &Some(99)));
    Ok(())
}

#[test]
fn filters_keep_source_order() -> anyhow::Result<()> {
    let r = filter_values_not_none(&stock());
    let keys: Vec<&str> = r.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["apple", "fig", "plum"]);

    let in_stock = filter_values(&r, |n| *n > 0);
    assert_records_equal(&in_stock, &[("apple", 3), ("plum", 12)]);

    let p_words = filter_keys(&r, |k| k.starts_with('p'));
    assert_records_equal(&p_words, &[("plum", 12)]);

    let entries = filter_entries(&r, |k, n| k.len() == 3 || *n > 10);
    assert_records_equal(&entries, &[("fig", 0), ("plum", 12)]);
    Ok(())
}

#[test]
fn maps() -> anyhow::Result<()> {
    let r = filter_values_not_none(&stock());

    let doubled = map_values(&r, |n| n * 2);
    assert_records_equal(&doubled, &[("apple", 6), ("fig", 0), ("plum", 24)]);

    let swapped = map_entries(&r, |k, n| (format!("{n}"), k.to_string()));
    assert_records_equal(
        &swapped,
        &[("3", "apple".to_string()), ("0", "fig".to_string()), ("12", "plum".to_string())],
    );

    let initials = map_keys(&r, |k| k[..1].to_string());
    assert_records_equal(&initials, &[("a", 3), ("f", 0), ("p", 12)]);
    Ok(())
}

#[test]
fn map_keys_collision_later_entry_wins() -> anyhow::Result<()> {
    let r: Record<u32> = [("pear".to_string(), 1), ("plum".to_string(), 2)].into_iter().collect();
    let initials = map_keys(&r, |k| k[..1].to_string());
    assert_records_equal(&initials, &[("p", 2)]);
    Ok(())
}
