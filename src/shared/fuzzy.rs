use std::cmp;

/// Levenshtein distance counted in chars.
pub fn distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }

    let (long, short) = if s2.chars().count() > s1.chars().count() {
        (s2, s1)
    } else {
        (s1, s2)
    };
    let short: Vec<char> = short.chars().collect();

    // Two rows are enough since each cell only looks one row back.
    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0usize; short.len() + 1];
    for (i, lc) in long.chars().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let sub_cost = if lc == *sc { 0 } else { 1 };
            current[j + 1] = cmp::min(
                cmp::min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + sub_cost,
            );
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[short.len()]
}

/// Scores `hay` against `needle` in `0.0..=1.0`.
///
/// A plain substring hit scores 1.0. Otherwise every needle token is compared
/// with the best matching hay token and the similarities are averaged.
pub fn score(needle: &str, hay: &str) -> f64 {
    if needle.is_empty() {
        return 0.0;
    }
    if hay.contains(needle) {
        return 1.0;
    }

    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();
    if needle_tokens.is_empty() || hay_tokens.is_empty() {
        return 0.0;
    }

    let total: f64 = needle_tokens
        .iter()
        .map(|token| {
            hay_tokens
                .iter()
                .map(|hay_token| similarity(token, hay_token))
                .fold(0.0, f64::max)
        })
        .sum();
    total / needle_tokens.len() as f64
}

fn similarity(s1: &str, s2: &str) -> f64 {
    if s2.starts_with(s1) {
        return 1.0;
    }
    let longest = cmp::max(s1.chars().count(), s2.chars().count());
    1.0 - distance(s1, s2) as f64 / longest as f64
}

/// Lowercases and folds the accented latin letters found in French addresses.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[test]
fn fuzzy_substring_scores_full() {
    assert_eq!(score("kennedy", "avenue kennedy, yaounde"), 1.0);
}

#[test]
fn fuzzy_typo_scores_partial() {
    let s = score("papirus", "librairie papyrus");
    assert!(s > 0.8 && s < 1.0);
}

#[test]
fn fuzzy_normalize_accents() {
    assert_eq!(normalize("Épicerie du Quartier"), "epicerie du quartier");
}
