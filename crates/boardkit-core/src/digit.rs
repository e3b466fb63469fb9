//! Cell value representation.

use std::{fmt, str::FromStr};

/// A cell value in the range 1-9.
///
/// This enum provides a type-safe representation of the values a board cell
/// can hold, preventing out-of-range values at compile time.
///
/// # Examples
///
/// ```
/// use boardkit_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Strict text parse: the whole string must be an integer 1-9
/// assert_eq!("7".parse::<Digit>(), Ok(Digit::D7));
/// assert!("10".parse::<Digit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The value 1.
    D1 = 1,
    /// The value 2.
    D2 = 2,
    /// The value 3.
    D3 = 3,
    /// The value 4.
    D4 = 4,
    /// The value 5.
    D5 = 5,
    /// The value 6.
    D6 = 6,
    /// The value 7.
    D7 = 7,
    /// The value 8.
    D8 = 8,
    /// The value 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all values from 1 to 9 in order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a numeric value, or `None` if the value is not
    /// in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use boardkit_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Some(Digit::D5));
    /// assert_eq!(Digit::from_value(0), None);
    /// assert_eq!(Digit::from_value(10), None);
    /// ```
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the digit as a static string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

/// Error returned when a string does not parse as a digit 1-9.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
#[display("input is not a whole number in the range 1-9")]
pub struct ParseDigitError;

impl FromStr for Digit {
    type Err = ParseDigitError;

    /// Parses a digit from raw text input.
    ///
    /// The entire string must be a decimal integer in the range 1-9; no
    /// trimming or prefix matching is applied. Empty, non-numeric,
    /// out-of-range, and whitespace-padded inputs are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Self::from_value)
            .ok_or(ParseDigitError)
    }
}
