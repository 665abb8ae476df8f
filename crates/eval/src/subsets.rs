// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Index subsets enumeration.

/// Largest n supported by [nck].
const MAX_N: usize = 52;

/// Largest k supported by [nck].
const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u32; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_K + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k] as usize
}

/// Calls the given closure for each k-subset of the indices 0..n.
///
/// Subsets are visited in colexicographic order, each as a sorted slice of
/// indices. If k > n no subset is visited, if k == 0 the empty subset is visited
/// once.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    if k == 0 {
        f(&[]);
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];
    for j in 0..k {
        c[j + 1] = j;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Maps each k-subset of the given items to a vector of items.
pub fn ksubsets<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut subsets = Vec::new();
    for_each_ksubset(items.len(), k, |idx| {
        subsets.push(idx.iter().map(|&i| items[i]).collect());
    });

    subsets
}
