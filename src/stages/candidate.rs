//! Candidate stage - draws random strings until one covers every selected category.

use rand::Rng;
use secrecy::SecretString;
use zeroize::Zeroize;

use super::StageResult;
use crate::category::CharacterCategory;
use crate::error::GenerationError;

/// Draws `length` characters uniformly, with replacement, from `alphabet`.
///
/// # Returns
/// - `Ok(candidate)` with exactly `length` characters
/// - `Err(EmptyAlphabet)` if there is nothing to draw from
/// - `Err(InvalidLength)` if `length` is zero
pub fn generate_candidate<R: Rng + ?Sized>(
    alphabet: &[char],
    length: usize,
    rng: &mut R,
) -> StageResult<String> {
    if alphabet.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }
    if length == 0 {
        return Err(GenerationError::InvalidLength(length));
    }

    Ok((0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect())
}

/// Regenerates candidates until every selected category matches.
///
/// At most `max_attempts` candidates are drawn; `is_cancelled` is polled before each
/// draw. Rejected candidates are zeroized.
///
/// # Returns
/// - `Ok(password)` on the first covering candidate
/// - `Err(GenerationFailed)` once the attempt budget is spent
/// - `Err(Cancelled)` if cancellation was requested
/// - any error from [`generate_candidate`]
pub fn generate_covering<R, F>(
    categories: &[CharacterCategory],
    alphabet: &[char],
    length: usize,
    max_attempts: usize,
    rng: &mut R,
    is_cancelled: F,
) -> StageResult<SecretString>
where
    R: Rng + ?Sized,
    F: Fn() -> bool,
{
    let mut attempts = 0;
    while attempts < max_attempts {
        attempts += 1;
        if is_cancelled() {
            return Err(GenerationError::Cancelled);
        }

        let mut candidate = generate_candidate(alphabet, length, rng)?;
        let covered = categories
            .iter()
            .filter(|c| c.is_selected())
            .all(|c| c.matches_constraint(&candidate));

        if covered {
            #[cfg(feature = "tracing")]
            tracing::debug!("Candidate accepted after {} attempt(s)", attempts);
            return Ok(SecretString::new(candidate.into()));
        }

        candidate.zeroize();
    }

    #[cfg(feature = "tracing")]
    tracing::error!("No covering candidate within {} attempts", max_attempts);

    Err(GenerationError::GenerationFailed {
        attempts: max_attempts,
    })
}
