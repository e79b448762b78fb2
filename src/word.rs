//! Bit-level layout of the machine word that compiled programs return.
//!
//! Every immediate value fits in one 32-bit word, with the low-order bits
//! reserved as a tag. The tag spaces are not orthogonal: the three sentinel
//! words ([`BOOL_FALSE`], [`BOOL_TRUE`] and [`NIL`]) all end in the character
//! nibble `0xF`, so they alias the character mask test. Decoding has to check
//! the sentinels by exact equality before applying the character mask, and
//! that ordering is part of the encoding contract (see [`crate::immediate`]).

use crate::error::RuntimeError;

/// The single word a compiled program hands back.
pub type Word = u32;

pub const FIXNUM_MASK: Word = 0x03;
pub const FIXNUM_TAG: Word = 0x00;
pub const FIXNUM_SHIFT: u32 = 2;

pub const BOOL_FALSE: Word = 0x2F;
pub const BOOL_TRUE: Word = 0x6F;
pub const NIL: Word = 0x3F;

pub const CHAR_MASK: Word = 0x0F;
pub const CHAR_TAG: Word = 0x0F;
pub const CHAR_SHIFT: u32 = 8;

/// Encodes a signed integer by shifting it above the zero fixnum tag.
pub fn fixnum(n: i32) -> Word {
    (n << FIXNUM_SHIFT) as Word
}

/// Encodes a character by shifting its code unit above the character tag.
pub fn character(c: char) -> Word {
    ((c as Word) << CHAR_SHIFT) | CHAR_TAG
}

pub fn boolean(b: bool) -> Word {
    if b {
        BOOL_TRUE
    } else {
        BOOL_FALSE
    }
}

pub fn nil() -> Word {
    NIL
}

/// Reads a word from its textual form: plain decimal, negative decimal
/// (reinterpreted as the two's-complement bit pattern), or hexadecimal with
/// a `0x` or `#x` prefix.
pub fn parse_word(text: &str) -> Result<Word, RuntimeError> {
    let text = text.trim();

    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("#x")) {
        Word::from_str_radix(hex, 16).map_err(|_| RuntimeError::MalformedWord(text.to_string()))
    } else {
        text.parse::<Word>()
            .or_else(|_| text.parse::<i32>().map(|n| n as Word))
            .map_err(|_| RuntimeError::MalformedWord(text.to_string()))
    }
}
