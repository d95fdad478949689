use thiserror::Error;

/// Failure while walking a trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// `3k + 1` no longer fits in a `u64`.
    #[error("sequence overflows 64-bit integers at step {at_step} (value {value})")]
    Overflow { at_step: usize, value: u64 },
    #[error("sequence did not reach 1 within {max_steps} steps")]
    TooLong { max_steps: usize },
}

/// The single user-facing error kind: the text field did not hold a usable start value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a whole number.")]
    NotAnInteger(String),
    #[error("Number must be a positive integer.")]
    NotPositive,
    #[error("Number is too large (maximum is {}).", u64::MAX)]
    TooLarge,
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

impl InputError {
    /// Title of the dialog the frontend shows for this error.
    pub fn title(&self) -> &'static str {
        "Input Error"
    }
}
