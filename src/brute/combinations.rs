//! Lexicographic k-combinations of `0..n`.

/// Generates every strictly increasing index sequence of length `k` drawn
/// from `0..n`, in lexicographic order, reusing one buffer.
pub(crate) struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    /// Advances to the next combination.
    pub(crate) fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        // Rightmost position that has not reached its maximum `n - k + i`.
        let mut i = k;
        loop {
            if i == 0 {
                self.exhausted = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}
