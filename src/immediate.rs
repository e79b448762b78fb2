//! Decoding of tagged words back into values, and their printed form.

use std::fmt::Display;
use std::io;

use crate::word::{self, Word};

/// A value recovered from a single machine word. The compiler only ever
/// produces the first four cases; [`Immediate::Unknown`] keeps the decoder
/// total over every possible bit pattern and carries the word so it can be
/// reported instead of silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Immediate {
    Fixnum(i32),
    Bool(bool),
    Nil,
    Char(u32),
    Unknown(Word),
}

impl Immediate {
    /// Classifies a word by its tag. The checks run in a fixed order that is
    /// part of the encoding contract: fixnums first (the only structurally
    /// disjoint tag), then the three sentinels by exact equality, and only
    /// then the character mask, because every sentinel also ends in the
    /// character nibble `0xF`.
    pub fn decode(word: Word) -> Immediate {
        if word & word::FIXNUM_MASK == word::FIXNUM_TAG {
            Immediate::Fixnum((word as i32) >> word::FIXNUM_SHIFT)
        } else if word == word::BOOL_FALSE {
            Immediate::Bool(false)
        } else if word == word::BOOL_TRUE {
            Immediate::Bool(true)
        } else if word == word::NIL {
            Immediate::Nil
        } else if word & word::CHAR_MASK == word::CHAR_TAG {
            Immediate::Char(word >> word::CHAR_SHIFT)
        } else {
            Immediate::Unknown(word)
        }
    }
}

impl From<Word> for Immediate {
    fn from(word: Word) -> Self {
        Immediate::decode(word)
    }
}

impl Display for Immediate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Immediate::Fixnum(n) => write!(f, "{n}"),
            Immediate::Bool(false) => write!(f, "#f"),
            Immediate::Bool(true) => write!(f, "#t"),
            Immediate::Nil => write!(f, "nil"),
            Immediate::Char(c) => {
                let c = char::from_u32(*c).unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(f, "#\\{c}")
            }
            Immediate::Unknown(w) => write!(f, "#<unknown word #x{w:08x}>"),
        }
    }
}

/// Decodes a word and writes its rendering plus a single newline to `out`.
/// This is the whole observable output of a compiled program.
pub fn write_result(word: Word, out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "{}", Immediate::decode(word))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_fixnums() {
        assert_eq!(Immediate::decode(0x00), Immediate::Fixnum(0));
        assert_eq!(Immediate::decode(0x04), Immediate::Fixnum(1));
        assert_eq!(Immediate::decode(0xFFFFFFFC), Immediate::Fixnum(-1));
        assert_eq!(
            Immediate::decode(word::fixnum(i32::MIN >> 2)),
            Immediate::Fixnum(i32::MIN >> 2)
        );
        assert_eq!(
            Immediate::decode(word::fixnum(i32::MAX >> 2)),
            Immediate::Fixnum(i32::MAX >> 2)
        );
    }

    #[test]
    fn test_decode_sentinels() {
        assert_eq!(Immediate::decode(0x2F), Immediate::Bool(false));
        assert_eq!(Immediate::decode(0x6F), Immediate::Bool(true));
        assert_eq!(Immediate::decode(0x3F), Immediate::Nil);
    }

    #[test]
    fn test_decode_characters() {
        assert_eq!(Immediate::decode(0x0F41), Immediate::Char(0x41));
        assert_eq!(Immediate::decode(word::character('z')), Immediate::Char('z' as u32));
    }

    /// The sentinels end in the character nibble, so a decoder that ran the
    /// mask test first would misread all three of them as characters.
    #[test]
    fn test_sentinels_win_over_character_mask() {
        assert_eq!(word::BOOL_FALSE & word::CHAR_MASK, word::CHAR_TAG);
        assert_eq!(Immediate::decode(word::BOOL_FALSE), Immediate::Bool(false));

        assert_eq!(word::BOOL_TRUE & word::CHAR_MASK, word::CHAR_TAG);
        assert_eq!(Immediate::decode(word::BOOL_TRUE), Immediate::Bool(true));

        assert_eq!(word::NIL & word::CHAR_MASK, word::CHAR_TAG);
        assert_eq!(Immediate::decode(word::NIL), Immediate::Nil);
    }

    #[test]
    fn test_decode_unknown_words() {
        // low bits 0b10: not a fixnum, not a sentinel, low nibble is not 0xF
        assert_eq!(Immediate::decode(0x02), Immediate::Unknown(0x02));
        assert_eq!(Immediate::decode(0x2D), Immediate::Unknown(0x2D));
    }

    #[test]
    fn test_rendering() {
        assert_eq!(Immediate::decode(0x04).to_string(), "1");
        assert_eq!(Immediate::decode(0xFFFFFFFC).to_string(), "-1");
        assert_eq!(Immediate::decode(0x2F).to_string(), "#f");
        assert_eq!(Immediate::decode(0x6F).to_string(), "#t");
        assert_eq!(Immediate::decode(0x3F).to_string(), "nil");
        assert_eq!(Immediate::decode(0x0F41).to_string(), "#\\A");
        assert_eq!(Immediate::decode(0x02).to_string(), "#<unknown word #x00000002>");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        for w in [0x04, 0x2F, 0x6F, 0x3F, 0x0F41, 0x02] {
            assert_eq!(Immediate::decode(w).to_string(), Immediate::decode(w).to_string());
        }
    }

    #[test]
    fn test_write_result_emits_one_line() {
        let mut out = Vec::new();
        write_result(0x04, &mut out).unwrap();
        assert_eq!(out, b"1\n");

        let mut out = Vec::new();
        write_result(0x0F41, &mut out).unwrap();
        assert_eq!(out, b"#\\A\n");
    }
}
