/// Definitions of errors that can occur while decoding program results.
use thiserror::Error;

use crate::word::Word;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("word #x{0:08x} matches no immediate tag")]
    UnknownTag(Word),

    #[error("cannot read '{0}' as a machine word")]
    MalformedWord(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
