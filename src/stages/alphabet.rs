//! Alphabet stage - concatenates the characters of selected categories.

use crate::category::CharacterCategory;

/// Returns the characters of every selected category, in category order.
///
/// Characters shared by two selected categories appear twice and are drawn twice as
/// often.
pub fn build_alphabet(categories: &[CharacterCategory]) -> Vec<char> {
    categories
        .iter()
        .filter(|c| c.is_selected())
        .flat_map(|c| c.characters().iter().copied())
        .collect()
}
