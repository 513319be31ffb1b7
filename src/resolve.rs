//! Decides which existing category a raw label belongs to, merging noisy
//! near-duplicate spellings into one key.

use crate::matching::{normalize, similarity};

/// Minimum similarity score for two differently-spelled labels to be treated
/// as the same category.
pub const SIMILARITY_THRESHOLD: f64 = 0.9;

/// Resolves a raw label against the existing category keys using the default
/// fuzzy threshold.
pub fn resolve_category(raw_name: &str, existing_keys: &[&str]) -> String {
    resolve_category_with_threshold(raw_name, existing_keys, SIMILARITY_THRESHOLD)
}

/// Resolves a raw label against the existing category keys: an exact match
/// after normalization wins immediately; otherwise the best fuzzy score at or
/// above `threshold` wins; otherwise the raw label becomes a new key.
///
/// Keys must be supplied in first-seen order. Ties keep the earlier key: a
/// later key only wins with a strictly greater score.
pub fn resolve_category_with_threshold(
    raw_name: &str,
    existing_keys: &[&str],
    threshold: f64,
) -> String {
    let normalized = normalize(raw_name);

    for &existing in existing_keys {
        if normalize(existing) == normalized {
            tracing::debug!(raw = raw_name, key = existing, "exact match after normalization");
            return existing.to_owned();
        }
    }

    let mut best_match: Option<&str> = None;
    let mut highest_similarity = 0.0_f64;
    for &existing in existing_keys {
        let score = similarity(&normalized, &normalize(existing));
        if score >= threshold && score > highest_similarity {
            highest_similarity = score;
            best_match = Some(existing);
        }
    }

    match best_match {
        Some(key) => {
            tracing::debug!(
                raw = raw_name,
                key,
                score = highest_similarity,
                "fuzzy-merged into existing category"
            );
            key.to_owned()
        }
        None => raw_name.to_owned(),
    }
}
