use seqkit::*;

#[test]
fn running_reduce_emits_every_accumulator() -> anyhow::Result<()> {
    assert_eq!(running_reduce(&[1, 2, 3, 4], |acc, x| acc + x, 0), vec![1, 3, 6, 10]);
    assert_eq!(running_reduce(&[1, 2, 3], |acc, x| acc * x, 10), vec![10, 20, 60]);

    let words = ["a", "b", "c"];
    let prefixes = running_reduce(&words, |acc: String, w| acc + *w, String::new());
    assert_eq!(prefixes, vec!["a", "ab", "abc"]);
    Ok(())
}

#[test]
fn running_reduce_excludes_seed() -> anyhow::Result<()> {
    let out = running_reduce(&[7], |acc, x| acc + x, 1);
    assert_eq!(out, vec![8]);
    assert!(running_reduce(&[] as &[i32], |acc, x| acc + x, 5).is_empty());
    Ok(())
}

#[test]
fn take_and_drop_by_count() -> anyhow::Result<()> {
    let xs = [1, 2, 3, 4, 5];
    assert_eq!(take_first(&xs, 2), vec![1, 2]);
    assert_eq!(take_first(&xs, 9), xs.to_vec());
    assert_eq!(take_last(&xs, 2), vec![4, 5]);
    assert_eq!(take_last(&xs, 9), xs.to_vec());
    assert_eq!(drop_first(&xs, 2), vec![3, 4, 5]);
    assert!(drop_first(&xs, 9).is_empty());
    assert_eq!(drop_last(&xs, 2), vec![1, 2, 3]);
    assert!(drop_last(&xs, 9).is_empty());
    Ok(())
}

#[test]
fn take_and_drop_by_predicate() -> anyhow::Result<()> {
    let xs = [2, 4, 5, 6, 7, 8, 10];
    let even = |n: &i32| n % 2 == 0;
    assert_eq!(take_first_while(&xs, even), vec![2, 4]);
    assert_eq!(drop_first_while(&xs, even), vec![5, 6, 7, 8, 10]);
    assert_eq!(take_last_while(&xs, even), vec![8, 10]);
    assert_eq!(drop_last_while(&xs, even), vec![2, 4, 5, 6, 7]);

    let all_even = [2, 4];
    assert_eq!(take_last_while(&all_even, even), vec![2, 4]);
    assert!(drop_last_while(&all_even, even).is_empty());
    Ok(())
}

#[test]
fn filters_and_maps() -> anyhow::Result<()> {
    let xs = [1, 2, 3, 4];
    assert_eq!(filter_not(&xs, |n| *n > 2), vec![1, 2]);
    let halves = map_not_none(&xs, |n| (n % 2 == 0).then_some(n / 2));
    assert_eq!(halves, vec![1, 2]);
    assert_eq!(first_not_none_of(&xs, |n| (*n > 2).then(|| n * 10)), Some(30));
    assert_eq!(first_not_none_of(&xs, |n| (*n > 9).then_some(*n)), None);
    Ok(())
}

#[test]
fn membership_predicates() -> anyhow::Result<()> {
    let xs = ["a", "b", "c"];
    assert!(includes_all(&xs, &["c", "a"]));
    assert!(!includes_all(&xs, &["a", "z"]));
    assert!(includes_all(&xs, &[]));
    assert!(includes_any(&xs, &["z", "b"]));
    assert!(!includes_any(&xs, &[]));
    assert!(includes_none(&xs, &["x", "y"]));
    assert!(none(&xs, |s| s.is_empty()));
    assert!(none::<i32, _>(&[], |_| true));
    Ok(())
}

#[test]
fn lookups() -> anyhow::Result<()> {
    let xs = [3, 8, 5, 8, 1];
    assert_eq!(last_index(&xs), Some(4));
    assert_eq!(last_index::<u8>(&[]), None);
    assert_eq!(find_last(&xs, |n| *n > 4), Some(8));
    assert_eq!(find_last(&xs, |n| *n > 9), None);
    assert_eq!(single(&xs, |n| *n == 5), Some(5));
    assert_eq!(single(&xs, |n| *n == 8), None);
    assert_eq!(single(&xs, |n| *n == 4), None);
    Ok(())
}

#[test]
fn numeric_reductions() -> anyhow::Result<()> {
    let xs = [(1, 2.0), (2, 3.5)];
    assert_eq!(sum_of(&xs, |p| p.1), 5.5);
    assert_eq!(sum_of::<(i32, f64), _>(&[], |p| p.1), 0.0);
    assert_eq!(average(&[1.0, 2.0, 6.0]), Some(3.0));
    assert_eq!(average(&[]), None);
    Ok(())
}

#[test]
fn zip_and_unzip() -> anyhow::Result<()> {
    let pairs = zip(&[1, 2, 3], &["a", "b"]);
    assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    let (nums, letters) = unzip(&pairs);
    assert_eq!(nums, vec![1, 2]);
    assert_eq!(letters, vec!["a", "b"]);
    Ok(())
}
