//! Bang token matching
//!
//! A bang is a standalone word anywhere in the query, so `"hello !g whats up"`
//! carries the `!g` bang. Words are produced by splitting on single spaces:
//! a run of spaces yields empty words, which can never equal a (non-empty)
//! bang. Comparison is case-insensitive on whole words only.

// =============================================================================
// Tokenization
// =============================================================================

/// Split a query into words on single spaces.
#[inline]
pub fn words(query: &str) -> std::str::Split<'_, char> {
    query.split(' ')
}

/// Case-insensitive whole-word comparison without allocating.
#[inline]
fn word_eq(word: &str, bang: &str) -> bool {
    word.chars()
        .flat_map(char::to_lowercase)
        .eq(bang.chars().flat_map(char::to_lowercase))
}

/// Index of the first word equal to `bang`.
#[inline]
fn bang_position(query: &str, bang: &str) -> Option<usize> {
    words(query).position(|word| word_eq(word, bang))
}

// =============================================================================
// Matching
// =============================================================================

/// Returns true if any word of `query` equals `bang` (case-insensitive).
///
/// # Examples
///
/// ```
/// use bang_core::bang::has_bang;
///
/// assert!(has_bang("hello !g whats up", "!g"));
/// assert!(!has_bang("!gi test", "!g"));
/// ```
pub fn has_bang(query: &str, bang: &str) -> bool {
    bang_position(query, bang).is_some()
}

/// Remove the first occurrence of `bang` from `query`.
///
/// The remaining words are rejoined with single spaces and the result is
/// trimmed. Returns the query unchanged when the bang is absent.
pub fn remove_bang(query: &str, bang: &str) -> String {
    let index = match bang_position(query, bang) {
        Some(index) => index,
        None => return query.to_string(),
    };

    let all: Vec<&str> = words(query).collect();
    let before = all[..index].join(" ");
    let after = all[index + 1..].join(" ");

    let mut joined = String::with_capacity(before.len() + after.len() + 1);
    joined.push_str(&before);
    joined.push(' ');
    joined.push_str(&after);
    joined.trim().to_string()
}
