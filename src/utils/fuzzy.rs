//! Similarity scoring
//!
//! Percentage similarity between two strings based on their longest common subsequence
//! (the Indel ratio): `2 * lcs / (len_a + len_b)`, counted in Unicode scalar values.

/// Highest possible score
pub const MAX_SCORE: u8 = 100;

/// Calculate similarity ratio between two strings as a percentage (0-100)
///
/// Identical non-empty strings score 100 and strings with no character in common score 0.
/// An empty string on either side scores 0. Halves round to the nearest even percentage.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let shared = 2 * lcs_length(&a, &b) * usize::from(MAX_SCORE);
    round_half_even(shared, total) as u8
}

/// Length of the longest common subsequence, single-row DP
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; short.len() + 1];

    for &x in long {
        let mut diagonal = 0;
        for (j, &y) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

fn round_half_even(numerator: usize, denominator: usize) -> usize {
    let quotient = numerator / denominator;
    let twice_rest = 2 * (numerator % denominator);
    if twice_rest > denominator || (twice_rest == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
