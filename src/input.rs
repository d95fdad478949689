use std::num::{IntErrorKind, NonZeroU64};

use crate::error::InputError;

/// Parse the text field into a start value.
///
/// Surrounding whitespace and a leading `+` are accepted. Anything that is not
/// a decimal integer is `NotAnInteger`; zero and negative numbers are
/// `NotPositive`.
pub fn parse_start(text: &str) -> Result<NonZeroU64, InputError> {
    let t = text.trim();
    let n = match t.parse::<i128>() {
        Ok(n) => n,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => InputError::TooLarge,
                IntErrorKind::NegOverflow => InputError::NotPositive,
                _ => InputError::NotAnInteger(t.to_string()),
            });
        }
    };
    if n <= 0 {
        return Err(InputError::NotPositive);
    }
    let n = u64::try_from(n).map_err(|_| InputError::TooLarge)?;
    NonZeroU64::new(n).ok_or(InputError::NotPositive)
}
