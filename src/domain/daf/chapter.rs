//! Chapter (perek) lookup.

/// Returns the 1-based chapter containing `page`.
///
/// `breaks[i]` is the first page of chapter `i + 2`, so the result is the
/// smallest `i` with `page < breaks[i - 1]`, or `breaks.len() + 1` when the
/// page is at or past every break. `breaks` must be ascending.
pub fn locate_chapter(page: i64, breaks: &[u32]) -> usize {
    breaks
        .iter()
        .position(|&b| page < i64::from(b))
        .unwrap_or(breaks.len())
        + 1
}
