//! Password generation library
//!
//! This library generates random passwords from user-selected character
//! categories and a validated length, guaranteeing that every selected
//! category appears at least once.
//!
//! # Features
//!
//! - `async` (default): Enables async generation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_DEFAULT_LENGTH`: Length suggested when prompting (default: 12)
//! - `PWD_GEN_MAX_ATTEMPTS`: Candidate draws before giving up (default: 10000)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gen::{GeneratorConfig, TerminalPrompt, generate_password};
//! use secrecy::ExposeSecret;
//!
//! let config = GeneratorConfig::from_env();
//! let stdin = std::io::stdin();
//! let mut prompt = TerminalPrompt::new(stdin.lock(), std::io::stdout());
//!
//! let outcome = generate_password(&config, &mut prompt);
//! if let Some(password) = outcome.password() {
//!     println!("{}", password.expose_secret());
//! }
//! println!("{}", outcome.feedback());
//! ```

// Internal modules
mod category;
mod config;
mod error;
mod feedback;
mod generator;
mod input;
mod stages;

// Public API
pub use category::{
    CategoryDefinition, CharacterCategory, LOWERCASE, NUMBERS, SPECIAL_CHARACTERS, UPPERCASE,
    default_categories,
};
pub use config::{DEFAULT_LENGTH, DEFAULT_MAX_ATTEMPTS, GeneratorConfig, MAX_LENGTH, MIN_LENGTH};
pub use error::{CategoryError, ErrorKind, GenerationError, LengthError};
pub use feedback::format_feedback;
pub use generator::{PasswordOutcome, generate_password, generate_password_with_rng};
pub use input::{InputProvider, TerminalPrompt};
pub use stages::{build_alphabet, collect_selections, generate_candidate, validate_length};

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
