use thiserror::Error;

use crate::breakpoint::Breakpoint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn value_not_a_number(bp: Breakpoint) -> Self {
        Error::InvalidArgument(format!(
            "The value associated with breakpoint \"{bp}\" must be a number."
        ))
    }
}
