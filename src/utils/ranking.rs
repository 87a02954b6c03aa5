//! Stable argmax
//!
//! Both best-season selections keep the first item that reaches the maximum.

/// First item with the largest key; later items must be strictly greater to win
pub fn stable_argmax<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Option<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<(T, K)> = None;
    for item in items {
        let k = key(&item);
        match &best {
            Some((_, best_key)) if !(k > *best_key) => {}
            _ => best = Some((item, k)),
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_maximum_wins() {
        let items = [("a", 1), ("b", 3), ("c", 3), ("d", 2)];
        assert_eq!(stable_argmax(items, |(_, v)| *v), Some(("b", 3)));
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(stable_argmax(items, |v| *v), None);
    }
}
