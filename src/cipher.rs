//! The two transform algorithms and the encrypt/decrypt dispatch.
//!
//! Both are symmetric substitutions: `shift` rotates ASCII letters inside
//! their 26-letter range and leaves everything else alone, `unicode` moves
//! every character by the raw key along the codepoint axis.

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Enc,
    Dec,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Shift,
    Unicode,
}

impl Algorithm {
    pub fn apply(self, mode: Mode, text: &str, key: i64) -> Result<String, Error> {
        match (self, mode) {
            (Algorithm::Shift, Mode::Enc) => Ok(shift_letters(text, key)),
            // Decrypting a rotation is rotating by the complement.
            (Algorithm::Shift, Mode::Dec) => Ok(shift_letters(text, 26 - key.rem_euclid(26))),
            (Algorithm::Unicode, Mode::Enc) => shift_codepoints(text, key),
            (Algorithm::Unicode, Mode::Dec) => shift_codepoints(text, -key),
        }
    }
}

/// Caesar rotation. Only the key's residue mod 26 matters, so any integer
/// key (negative included) is fine.
fn shift_letters(text: &str, key: i64) -> String {
    text.chars()
        .map(|c| {
            let base = match c {
                'a'..='z' => b'a',
                'A'..='Z' => b'A',
                _ => return c,
            };
            let offset = (c as i64 - i64::from(base) + key).rem_euclid(26);
            (base + offset as u8) as char
        })
        .collect()
}

/// Raw codepoint offset, no clamping. Fails when the shifted value lands
/// outside the Unicode scalar range (negative, past 0x10FFFF, or in the
/// surrogate gap) since no such `char` exists.
fn shift_codepoints(text: &str, key: i64) -> Result<String, Error> {
    text.chars()
        .map(|c| {
            u32::try_from(i64::from(c as u32) + key)
                .ok()
                .and_then(char::from_u32)
                .ok_or(Error::ShiftOutOfRange { ch: c, key })
        })
        .collect()
}
