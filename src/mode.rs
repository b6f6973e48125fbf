//! Notation-preserving file mode
//!
//! A permission bit-mask can be written three ways in a descriptor
//! (`0440`, `0o440`, `288`). [`FileMode`] keeps the spelling the author chose
//! so that re-emission reproduces it.

use std::fmt;
use std::str::FromStr;

use crate::error::ModeError;

/// Largest mode accepted from decimal without digit validation (`0o777`)
const MAX_UNCHECKED_DECIMAL: u32 = 0o777;

/// Spelling convention of a mode literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeNotation {
    /// Leading-zero octal, e.g. `0440`
    Octal,
    /// Prefixed octal, e.g. `0o440`
    OctalWithPrefix,
    /// Base-10 digits, e.g. `288`
    #[default]
    RawDecimal,
}

/// A file mode together with the notation it was written in
///
/// Equality and hashing cover both the numeric value and the notation:
/// `0400`, `0o400` and `256` are three different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode {
    value: u32,
    notation: ModeNotation,
}

impl FileMode {
    /// Parse a mode literal, recording its notation
    ///
    /// - `0o`/`0O` prefix with digits: base 8, [`ModeNotation::OctalWithPrefix`]
    /// - leading `0` with more digits: base 8, [`ModeNotation::Octal`]
    /// - anything else: base 10, [`ModeNotation::RawDecimal`]
    ///
    /// Only the value and notation are kept, not the digit count. Extra
    /// leading zeros are dropped on output: `00440` re-emits as `0440` and
    /// `0o0440` as `0o440`.
    pub fn parse(literal: &str) -> Result<Self, ModeError> {
        if literal.is_empty() {
            return Err(ModeError::Empty);
        }

        let prefixed = literal.len() > 2
            && (literal.starts_with("0o") || literal.starts_with("0O"));
        if prefixed {
            let value = parse_octal_digits(&literal[2..], literal)?;
            return Ok(Self::new(value, ModeNotation::OctalWithPrefix));
        }

        if literal.starts_with('0') && literal.len() > 1 {
            let value = parse_octal_digits(literal, literal)?;
            return Ok(Self::new(value, ModeNotation::Octal));
        }

        if !literal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModeError::NotANumber {
                literal: literal.to_string(),
            });
        }
        let value = literal.parse::<u32>().map_err(|_| ModeError::OutOfRange {
            literal: literal.to_string(),
        })?;
        Ok(Self::new(value, ModeNotation::RawDecimal))
    }

    /// Build a mode from its numeric value
    ///
    /// Values up to `0o777` are taken as-is. Larger values must not contain
    /// the decimal digits 8 or 9, which catches octal spellings such as
    /// `755` mistakenly passed as decimal.
    pub fn from_decimal(value: u32, notation: ModeNotation) -> Result<Self, ModeError> {
        if value > MAX_UNCHECKED_DECIMAL {
            let literal = value.to_string();
            if let Some(digit) = literal.chars().find(|c| *c > '7') {
                return Err(ModeError::InvalidOctalDigit { digit, literal });
            }
        }
        Ok(Self::new(value, notation))
    }

    /// Reinterpret the decimal digits of `digits` as octal digits
    ///
    /// `755` becomes `0o755` (493).
    pub fn parse_octet_from_decimal_digits(
        digits: u32,
        notation: ModeNotation,
    ) -> Result<Self, ModeError> {
        let literal = digits.to_string();
        let value = parse_octal_digits(&literal, &literal)?;
        Ok(Self::new(value, notation))
    }

    fn new(value: u32, notation: ModeNotation) -> Self {
        Self { value, notation }
    }

    /// Numeric value of the mode
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Notation the mode was written in
    pub fn notation(&self) -> ModeNotation {
        self.notation
    }

    /// Same value, different spelling
    pub fn with_notation(self, notation: ModeNotation) -> Self {
        Self { notation, ..self }
    }

    /// Render in the requested notation
    pub fn to_notation_string(&self, notation: ModeNotation) -> String {
        match notation {
            ModeNotation::Octal => self.to_octal_string(),
            ModeNotation::OctalWithPrefix => format!("0o{:o}", self.value),
            ModeNotation::RawDecimal => self.value.to_string(),
        }
    }

    /// Leading-zero octal, whatever the recorded notation
    pub fn to_octal_string(&self) -> String {
        format!("0{:o}", self.value)
    }
}

fn parse_octal_digits(digits: &str, literal: &str) -> Result<u32, ModeError> {
    let mut value: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(10).ok_or_else(|| ModeError::NotANumber {
            literal: literal.to_string(),
        })?;
        if digit > 7 {
            return Err(ModeError::InvalidOctalDigit {
                digit: c,
                literal: literal.to_string(),
            });
        }
        value = value
            .checked_mul(8)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| ModeError::OutOfRange {
                literal: literal.to_string(),
            })?;
    }
    Ok(value)
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation_string(self.notation))
    }
}

impl FromStr for FileMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<FileMode> for u32 {
    fn from(mode: FileMode) -> Self {
        mode.value
    }
}

/// Integers converted directly are presented as leading-zero octal
impl TryFrom<u32> for FileMode {
    type Error = ModeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_decimal(value, ModeNotation::Octal)
    }
}
