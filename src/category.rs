//! Character categories the user can opt into.

use crate::error::CategoryError;

pub const SPECIAL_CHARACTERS: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const NUMBERS: &str = "0123456789";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Raw category data as configured by the caller.
///
/// Nothing is checked here; a definition only becomes usable once it is turned into a
/// [`CharacterCategory`] at the start of an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub characters: String,
    pub label: String,
}

impl CategoryDefinition {
    pub fn new(characters: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            label: label.into(),
        }
    }

    /// Builds a fresh, unselected category from this definition.
    pub fn instantiate(&self) -> Result<CharacterCategory, CategoryError> {
        CharacterCategory::new(&self.characters, &self.label)
    }
}

/// The four built-in categories, in display order.
pub fn default_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new(SPECIAL_CHARACTERS, "special characters"),
        CategoryDefinition::new(NUMBERS, "numbers"),
        CategoryDefinition::new(LOWERCASE, "lowercase letters"),
        CategoryDefinition::new(UPPERCASE, "uppercase letters"),
    ]
}

/// A named, non-empty character set plus the user's decision about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCategory {
    characters: Vec<char>,
    label: String,
    selected: bool,
}

impl CharacterCategory {
    /// Creates an unselected category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError`] if `characters` or `label` is empty.
    pub fn new(characters: &str, label: &str) -> Result<Self, CategoryError> {
        if characters.is_empty() {
            return Err(CategoryError::EmptyCharacters);
        }
        if label.is_empty() {
            return Err(CategoryError::EmptyLabel);
        }
        Ok(Self {
            characters: characters.chars().collect(),
            label: label.to_string(),
            selected: false,
        })
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn contains(&self, c: char) -> bool {
        self.characters.contains(&c)
    }

    /// Checks `candidate` against this category's inclusion rule.
    ///
    /// A selected category needs at least one of its characters in the candidate; an
    /// unselected one needs none of them.
    pub fn matches_constraint(&self, candidate: &str) -> bool {
        let present = candidate.chars().any(|c| self.contains(c));
        if self.selected { present } else { !present }
    }
}
