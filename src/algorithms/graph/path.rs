//! Path reconstruction from predecessor links

use rustc_hash::FxHashMap;

/// Walk `parent` links from `goal` back to `start` and return the path in
/// start → goal order.
///
/// Returns `None` when the chain breaks before reaching `start` or loops; the
/// walk is bounded by the number of links, so a corrupt mapping cannot spin.
pub fn reconstruct(parent: &FxHashMap<usize, usize>, start: usize, goal: usize) -> Option<Vec<usize>> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        if path.len() > parent.len() {
            return None;
        }
        cur = *parent.get(&cur)?;
        path.push(cur);
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(pairs: &[(usize, usize)]) -> FxHashMap<usize, usize> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_chain_is_reversed() {
        let parent = links(&[(1, 0), (2, 1), (5, 2)]);
        assert_eq!(reconstruct(&parent, 0, 5), Some(vec![0, 1, 2, 5]));
    }

    #[test]
    fn test_goal_equal_to_start() {
        assert_eq!(reconstruct(&FxHashMap::default(), 3, 3), Some(vec![3]));
    }

    #[test]
    fn test_broken_chain() {
        let parent = links(&[(2, 1)]);
        assert_eq!(reconstruct(&parent, 0, 2), None);
    }

    #[test]
    fn test_cycle_is_rejected() {
        let parent = links(&[(1, 2), (2, 1)]);
        assert_eq!(reconstruct(&parent, 0, 1), None);
    }
}
