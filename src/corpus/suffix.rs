//! Substring Index
//!
//! A suffix array over the case-folded bytes of one document. Lookups return every
//! start offset of a needle in `O(m log n)` comparisons, and the structure is never
//! mutated after construction, so any number of threads may query it at once.

/// Lower-cases `text` without changing its byte length.
///
/// A char is replaced by its lower-case form only when that form is a single char with
/// the same UTF-8 width. Byte offsets into the folded string are therefore valid offsets
/// into the original string, which is what snippet extraction relies on.
pub fn fold_case(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }

    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.len_utf8() == ch.len_utf8() => folded.push(l),
            _ => folded.push(ch),
        }
    }
    folded
}

#[derive(Debug, Clone, Default)]
pub struct SuffixIndex {
    text: Vec<u8>,
    suffixes: Vec<usize>,
}

impl SuffixIndex {
    /// Builds the index over `text`. Callers pass already case-folded bytes.
    pub fn new(text: Vec<u8>) -> Self {
        let suffixes = build_suffix_array(&text);
        Self { text, suffixes }
    }

    /// Returns the start offset of every occurrence of `needle`, in suffix order
    /// (not sorted by position). An empty needle matches nothing.
    pub fn lookup(&self, needle: &[u8]) -> Vec<usize> {
        if needle.is_empty() || needle.len() > self.text.len() {
            return Vec::new();
        }

        let m = needle.len();
        let lo = self
            .suffixes
            .partition_point(|&start| self.prefix(start, m) < needle);
        let hi = lo
            + self.suffixes[lo..].partition_point(|&start| self.prefix(start, m) == needle);

        self.suffixes[lo..hi].to_vec()
    }

    /// Length of the indexed text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn prefix(&self, start: usize, len: usize) -> &[u8] {
        let end = (start + len).min(self.text.len());
        &self.text[start..end]
    }
}

/// Prefix-doubling construction: suffixes are sorted by their first `2k` bytes using the
/// ranks from the previous round, until every rank is distinct.
fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut suffixes: Vec<usize> = (0..n).collect();
    if n < 2 {
        return suffixes;
    }

    let mut rank: Vec<usize> = text.iter().map(|&b| b as usize).collect();
    let mut next_rank = vec![0usize; n];
    let mut k = 1;

    loop {
        // A missing second half sorts first: a proper prefix is the smaller suffix.
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });

        suffixes.sort_unstable_by_key(|&i| key(i));

        next_rank[suffixes[0]] = 0;
        for w in 1..n {
            let bump = usize::from(key(suffixes[w - 1]) < key(suffixes[w]));
            next_rank[suffixes[w]] = next_rank[suffixes[w - 1]] + bump;
        }

        std::mem::swap(&mut rank, &mut next_rank);

        if rank[suffixes[n - 1]] == n - 1 {
            break;
        }
        k *= 2;
    }

    suffixes
}
