//! Selection stage - asks which categories to include.

use super::StageResult;
use crate::category::{CategoryDefinition, CharacterCategory};
use crate::error::GenerationError;
use crate::input::InputProvider;

/// Builds fresh categories from `definitions` and records the user's choice for each.
///
/// Definitions are processed in order; a malformed one stops the stage before the
/// user is asked about it.
///
/// # Returns
/// - `Ok(categories)` with at least one selected
/// - `Err(MalformedCategory)` if a definition has no characters or no label
/// - `Err(NoCategorySelected)` if every category was declined
pub fn collect_selections<P: InputProvider + ?Sized>(
    definitions: &[CategoryDefinition],
    input: &mut P,
) -> StageResult<Vec<CharacterCategory>> {
    let mut categories = Vec::with_capacity(definitions.len());

    for (index, definition) in definitions.iter().enumerate() {
        let mut category = definition
            .instantiate()
            .map_err(|source| GenerationError::MalformedCategory { index, source })?;
        category.set_selected(input.ask_include(category.label()));
        categories.push(category);
    }

    if !categories.iter().any(CharacterCategory::is_selected) {
        return Err(GenerationError::NoCategorySelected);
    }

    Ok(categories)
}
