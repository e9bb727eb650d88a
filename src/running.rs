//! Running reduction.

/// Fold `items` from `initial`, returning every accumulator produced.
///
/// The output has one entry per input element; the seed itself is not
/// included. An empty input gives an empty output.
///
/// # Example
/// ```
/// use seqkit::running_reduce;
///
/// assert_eq!(running_reduce(&[1, 2, 3, 4], |acc, x| acc + x, 0), vec![1, 3, 6, 10]);
/// assert_eq!(running_reduce(&[] as &[i32], |acc, x| acc + x, 100), Vec::<i32>::new());
/// ```
pub fn running_reduce<T, A, F>(items: &[T], reducer: F, initial: A) -> Vec<A>
where
    A: Clone,
    F: Fn(A, &T) -> A,
{
    let mut out = Vec::with_capacity(items.len());
    let mut acc = initial;
    for t in items {
        acc = reducer(acc, t);
        out.push(acc.clone());
    }
    out
}
