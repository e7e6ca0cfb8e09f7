// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinations iteration.

/// Maximum subset size supported by [KSubsets].
pub const MAX_K: usize = 7;

/// Iterates all k-element index combinations of `0..n` in lexicographic order.
///
/// Subsets are kept in a fixed size buffer so iterating doesn't allocate:
///
/// ```
/// # use holdem_cards::KSubsets;
/// let mut subsets = KSubsets::new(4, 3);
/// assert_eq!(subsets.next(), Some([0, 1, 2].as_slice()));
/// assert_eq!(subsets.next(), Some([0, 1, 3].as_slice()));
/// assert_eq!(subsets.next(), Some([0, 2, 3].as_slice()));
/// assert_eq!(subsets.next(), Some([1, 2, 3].as_slice()));
/// assert_eq!(subsets.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct KSubsets {
    idx: [usize; MAX_K],
    n: usize,
    k: usize,
    started: bool,
    done: bool,
}

impl KSubsets {
    /// Creates an iterator over all k-subsets of `0..n`.
    ///
    /// Panics if k > 7.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");

        let mut idx = [0; MAX_K];
        for (i, v) in idx.iter_mut().enumerate().take(k) {
            *v = i;
        }

        Self {
            idx,
            n,
            k,
            started: false,
            done: k > n,
        }
    }

    /// Returns the next subset, the returned slice is valid until the next call.
    ///
    /// This is a lending iterator so it doesn't implement [Iterator].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if self.started && !self.advance() {
            self.done = true;
            return None;
        }

        self.started = true;
        Some(&self.idx[..self.k])
    }

    /// Moves to the next combination, returns false after the last one.
    fn advance(&mut self) -> bool {
        let (n, k) = (self.n, self.k);

        // Find the rightmost index that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.idx[i] < n - k + i) else {
            return false;
        };

        self.idx[i] += 1;
        for j in (i + 1)..k {
            self.idx[j] = self.idx[j - 1] + 1;
        }

        true
    }
}

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        let mut subsets = KSubsets::new(n, k);
        while let Some(s) = subsets.next() {
            out.push(s.to_vec());
        }
        out
    }

    #[test]
    fn test_nck() {
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 7, 21, 35, 35, 21, 7, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(7, k), v));
    }

    #[test]
    fn subsets_of_seven() {
        let subsets = collect(7, 5);
        assert_eq!(subsets.len(), 21);
        assert_eq!(subsets[0], vec![0, 1, 2, 3, 4]);
        assert_eq!(subsets[1], vec![0, 1, 2, 3, 5]);
        assert_eq!(subsets[20], vec![2, 3, 4, 5, 6]);

        // Strictly increasing and in lexicographic order.
        assert!(subsets.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        assert!(subsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn subsets_counts() {
        for n in 0..=10 {
            for k in 0..=MAX_K {
                assert_eq!(collect(n, k).len(), nck(n, k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn subsets_edge_cases() {
        // A single subset when k == n.
        assert_eq!(collect(5, 5), vec![vec![0, 1, 2, 3, 4]]);

        // One empty subset for k == 0.
        assert_eq!(collect(3, 0), vec![Vec::<usize>::new()]);

        // No subsets when k > n.
        assert!(collect(4, 5).is_empty());

        // Iterator stays exhausted.
        let mut subsets = KSubsets::new(5, 5);
        assert!(subsets.next().is_some());
        assert!(subsets.next().is_none());
        assert!(subsets.next().is_none());
    }

    #[test]
    #[should_panic]
    fn subsets_k_too_large() {
        KSubsets::new(10, 8);
    }
}
