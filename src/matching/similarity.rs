/// Levenshtein distance over case-folded inputs, so matching is
/// case-insensitive regardless of any earlier normalization.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Normalized similarity in `[0, 1]` derived from edit distance: the share of
/// the longer string that survives the cheapest edit script. Two empty strings
/// score `1.0`.
///
/// Ordering and length are measured on the case-folded form the distance is
/// computed over; folding can change a string's char count (e.g. 'İ' folds to
/// two chars), and mixing folded and unfolded lengths would let the distance
/// exceed the length.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let (longer, shorter) = if a.chars().count() < b.chars().count() {
        (&b, &a)
    } else {
        (&a, &b)
    };
    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }
    (longer_len - strsim::levenshtein(longer, shorter)) as f64 / longer_len as f64
}
