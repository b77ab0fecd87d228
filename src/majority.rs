use std::cmp::Reverse;

// Majority vote over the labels of the k nearest neighbors.
// Labels must all be < num_labels. Ties break toward the smallest label,
// so the result is deterministic for any input order.
pub fn vote(labels: &[usize], num_labels: usize) -> usize {
    let mut counts = vec![0_usize; num_labels];
    for &label in labels {
        counts[label] += 1;
    }
    counts
        .iter()
        .enumerate()
        .min_by_key(|&(label, &count)| (Reverse(count), label))
        .map(|(label, _)| label)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_majority() {
        assert_eq!(vote(&[3, 3, 7], 10), 3);
        assert_eq!(vote(&[9, 1, 9, 9, 1], 10), 9);
    }

    #[test]
    fn test_single_label() {
        assert_eq!(vote(&[4], 10), 4);
    }

    #[test]
    fn test_tie_breaks_to_smallest_label() {
        assert_eq!(vote(&[5, 2, 5, 2], 10), 2);
        assert_eq!(vote(&[9, 0], 10), 0);
        // Three-way tie
        assert_eq!(vote(&[8, 6, 7], 10), 6);
    }

    #[test]
    fn test_zero_count_labels_never_win() {
        assert_eq!(vote(&[9, 9], 10), 9);
    }
}
