//! Name search

use crate::types::LocalizedCharacter;

/// Case-insensitive substring match on the character name.
///
/// `query` must already be lowercased. A character without a name only
/// matches the empty query.
fn matches_lowered(character: &LocalizedCharacter, query: &str) -> bool {
    query.is_empty() || character.display_name().to_lowercase().contains(query)
}

/// Positions of the characters whose name contains `query`, in catalog order.
pub fn filter_indices(characters: &[LocalizedCharacter], query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    characters
        .iter()
        .enumerate()
        .filter(|(_, c)| matches_lowered(c, &query))
        .map(|(i, _)| i)
        .collect()
}

/// Characters whose name contains `query`, ignoring case.
///
/// An empty query returns every character. Order is preserved.
pub fn filter_by_name<'a>(
    characters: &'a [LocalizedCharacter],
    query: &str,
) -> Vec<&'a LocalizedCharacter> {
    let query = query.to_lowercase();
    characters
        .iter()
        .filter(|c| matches_lowered(c, &query))
        .collect()
}
