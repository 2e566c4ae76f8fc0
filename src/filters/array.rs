//! Array filters

/// First `n` items, or the last `|n|` items when `n` is negative
///
/// # Examples
/// ```
/// use leafkit::filters::head;
/// assert_eq!(head(&[1, 2, 3, 4], 2), vec![1, 2]);
/// assert_eq!(head(&[1, 2, 3, 4], -1), vec![4]);
/// ```
pub fn head<T: Clone>(items: &[T], n: isize) -> Vec<T> {
    if n < 0 {
        let count = n.unsigned_abs().min(items.len());
        items[items.len() - count..].to_vec()
    } else {
        items.iter().take(n as usize).cloned().collect()
    }
}
