//! Password generator - runs a single generation attempt.

use rand::Rng;
use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::input::InputProvider;
use crate::stages::{build_alphabet, collect_selections, generate_covering, validate_length};

/// Result of one attempt: either a password or the error that stopped it, never both.
#[derive(Debug)]
pub struct PasswordOutcome {
    length: Option<usize>,
    selected_labels: Vec<String>,
    result: Result<SecretString, GenerationError>,
}

impl PasswordOutcome {
    fn finish(
        length: Option<usize>,
        selected_labels: Vec<String>,
        result: Result<SecretString, GenerationError>,
    ) -> Self {
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            if err.is_defect() {
                tracing::error!("Password generation defect: {}", err);
            } else {
                tracing::debug!("Password generation stopped: {}", err);
            }
        }

        Self {
            length,
            selected_labels,
            result,
        }
    }

    /// The generated password, present only on success.
    pub fn password(&self) -> Option<&SecretString> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&GenerationError> {
        self.result.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Validated length, if the attempt got that far.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Labels of the selected categories, in category order. Empty unless a password was
    /// produced.
    pub fn selected_labels(&self) -> &[String] {
        &self.selected_labels
    }

    /// Whether a copy action makes sense for this outcome.
    pub fn is_copy_available(&self) -> bool {
        self.is_success()
    }

    pub fn into_result(self) -> Result<SecretString, GenerationError> {
        self.result
    }
}

/// Runs one attempt with the thread-local random generator.
///
/// # Arguments
/// * `config` - Length bounds, retry cap and category definitions
/// * `input` - Where the length and category decisions come from
///
/// # Returns
/// A `PasswordOutcome` holding either the password or the first error hit.
pub fn generate_password<P: InputProvider + ?Sized>(
    config: &GeneratorConfig,
    input: &mut P,
) -> PasswordOutcome {
    let mut rng = rand::rng();
    run_attempt(config, input, &mut rng, || false)
}

/// Same as [`generate_password`], drawing from `rng`.
pub fn generate_password_with_rng<P, R>(
    config: &GeneratorConfig,
    input: &mut P,
    rng: &mut R,
) -> PasswordOutcome
where
    P: InputProvider + ?Sized,
    R: Rng + ?Sized,
{
    run_attempt(config, input, rng, || false)
}

fn run_attempt<P, R, F>(
    config: &GeneratorConfig,
    input: &mut P,
    rng: &mut R,
    is_cancelled: F,
) -> PasswordOutcome
where
    P: InputProvider + ?Sized,
    R: Rng + ?Sized,
    F: Fn() -> bool,
{
    let raw = input.ask_length(config.min_length, config.max_length, config.default_length);
    let length = match validate_length(raw.as_deref(), config.min_length, config.max_length) {
        Ok(length) => length,
        Err(err) => return PasswordOutcome::finish(None, Vec::new(), Err(err.into())),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!("User selected a password length of {}", length);

    let categories = match collect_selections(&config.categories, input) {
        Ok(categories) => categories,
        Err(err) => return PasswordOutcome::finish(Some(length), Vec::new(), Err(err)),
    };

    let selected_labels: Vec<String> = categories
        .iter()
        .filter(|c| c.is_selected())
        .map(|c| c.label().to_string())
        .collect();
    let alphabet = build_alphabet(&categories);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Selected {:?}, drawing from {} characters",
        selected_labels,
        alphabet.len()
    );

    match generate_covering(
        &categories,
        &alphabet,
        length,
        config.max_attempts,
        rng,
        is_cancelled,
    ) {
        Ok(password) => PasswordOutcome::finish(Some(length), selected_labels, Ok(password)),
        Err(err) => PasswordOutcome::finish(Some(length), Vec::new(), Err(err)),
    }
}

/// Async version that sends the outcome via channel.
///
/// The token is checked before every candidate draw; a cancelled attempt yields
/// [`GenerationError::Cancelled`].
#[cfg(feature = "async")]
pub async fn generate_password_tx<P: InputProvider + ?Sized>(
    config: &GeneratorConfig,
    input: &mut P,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordOutcome>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password generation is about to start...");

    let outcome = {
        let mut rng = rand::rng();
        run_attempt(config, input, &mut rng, || token.is_cancelled())
    };

    if let Err(_err) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password outcome: {}", _err);
    }
}
