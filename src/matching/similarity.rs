use std::collections::HashMap;

/// Char-level similarity between two strings using longest-matching-block
/// decomposition.
///
/// The ratio is `2·M / T` where `M` is the total length of the matching
/// blocks found by greedily taking the longest common block and recursing on
/// the pieces to its left and right, and `T` is the combined length of both
/// strings. Two empty strings score 1.0.
///
/// Tie behavior is pinned: among equally long blocks the one starting
/// earliest in the first string (then earliest in the second) wins, so the
/// score is a pure function of its inputs and downstream pairing is
/// reproducible.
#[derive(Debug)]
pub struct SequenceAlignment {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each char within `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceAlignment {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest block with `a[i..i + size] == b[j..j + size]` inside the given
    /// windows, preferring the earliest start in `a`, then in `b`.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let mut besti = alo;
        let mut bestj = blo;
        let mut bestsize = 0usize;

        // j2len[j] = length of the longest block ending at a[i], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut newj2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = match j.checked_sub(1) {
                        Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                        None => 1,
                    };
                    newj2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = newj2len;
        }

        (besti, bestj, bestsize)
    }

    /// Non-overlapping matching blocks as `(a_start, b_start, size)`,
    /// ascending in both start positions.
    #[must_use]
    pub fn matching_blocks(&self) -> Vec<(usize, usize, usize)> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, size) = self.find_longest_match(alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            blocks.push((i, j, size));
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                queue.push((i + size, ahi, j + size, bhi));
            }
        }

        blocks.sort_unstable();
        blocks
    }

    /// Similarity in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let matched: usize = self.matching_blocks().iter().map(|&(_, _, size)| size).sum();
        let total = self.a.len() + self.b.len();
        if total == 0 {
            1.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                2.0 * matched as f64 / total as f64
            }
        }
    }
}

/// Similarity between two strings; convenience over [`SequenceAlignment`].
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    SequenceAlignment::new(a, b).ratio()
}

/// Find the candidate most similar to `key`.
///
/// Returns `(None, 0.0)` when the candidate list is empty or every candidate
/// scores zero. Comparison is strictly greater-than, so on equal scores the
/// first-encountered candidate wins; callers rely on this for deterministic
/// pairing.
#[must_use]
pub fn best_match<'a>(key: &str, candidates: &'a [String]) -> (Option<&'a str>, f64) {
    let mut best: Option<&str> = None;
    let mut best_score = 0.0f64;

    for candidate in candidates {
        let score = similarity(key, candidate);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    (best, best_score)
}
