//! Index-combination enumeration for conditioning-set search.
//!
//! Explicit iterator structs over an index range, no recursion. Both the
//! collider scan (bounded powerset) and step D (fixed-size subsets) drive
//! their searches through these.

use smallvec::SmallVec;

/// Index buffer for one combination; conditioning sets are small.
pub type Combo = SmallVec<[usize; 8]>;

/// All size-k subsets of `0..n` in lexicographic order.
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Combo,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: Combo::new(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Combo;

    fn next(&mut self) -> Option<Combo> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.indices = (0..self.k).collect();
            return Some(self.indices.clone());
        }
        if self.k == 0 {
            self.done = true;
            return None;
        }
        // Rightmost index that can still advance.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - self.k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// All subsets of `0..n` of size `0..=max`, sizes ascending, the empty
/// set first. `max = None` enumerates the full powerset.
pub struct SubsetsUpTo {
    n: usize,
    max: usize,
    size: usize,
    inner: Combinations,
}

impl SubsetsUpTo {
    pub fn new(n: usize, max: Option<usize>) -> Self {
        Self {
            n,
            max: max.map_or(n, |m| m.min(n)),
            size: 0,
            inner: Combinations::new(n, 0),
        }
    }
}

impl Iterator for SubsetsUpTo {
    type Item = Combo;

    fn next(&mut self) -> Option<Combo> {
        loop {
            if let Some(combo) = self.inner.next() {
                return Some(combo);
            }
            if self.size >= self.max {
                return None;
            }
            self.size += 1;
            self.inner = Combinations::new(self.n, self.size);
        }
    }
}
