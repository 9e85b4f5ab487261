//! Random string generation.

use rand::Rng;
use thiserror::Error;

use crate::consts::NUMBER_CHARACTERS;

/// Errors from random string generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Requested length was zero.
    #[error("invalid length, length must be non-zero")]
    InvalidLength,

    /// Character set was empty.
    #[error("invalid characters, character must not be empty")]
    EmptyCharacterSet,
}

/// Random string of `length` characters drawn from `charset`.
///
/// `None` draws from [`NUMBER_CHARACTERS`]. Uses the thread-local CSPRNG.
pub fn generate_random_string(length: usize, charset: Option<&str>) -> Result<String, RandomError> {
    if length == 0 {
        return Err(RandomError::InvalidLength);
    }
    let chars: Vec<char> = charset.unwrap_or(NUMBER_CHARACTERS).chars().collect();
    if chars.is_empty() {
        return Err(RandomError::EmptyCharacterSet);
    }

    let mut rng = rand::thread_rng();
    Ok((0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SMALL_LETTERS;

    #[test]
    fn test_number_characters() {
        let sample = generate_random_string(5, Some(NUMBER_CHARACTERS)).unwrap();
        assert_eq!(sample.len(), 5);
        assert!(sample.parse::<u64>().is_ok());

        let sample = generate_random_string(5, None).unwrap();
        assert_eq!(sample.len(), 5);
        assert!(sample.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_custom_charset() {
        let sample = generate_random_string(64, Some(SMALL_LETTERS)).unwrap();
        assert!(sample.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            generate_random_string(1, Some("")),
            Err(RandomError::EmptyCharacterSet)
        );
        assert_eq!(
            generate_random_string(0, Some("")),
            Err(RandomError::InvalidLength)
        );
    }
}
