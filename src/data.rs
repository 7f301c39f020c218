//!
//! Conversions between typed element values and their exact byte layout.
//!
//! These functions are pure and stateless; the [`Tag`](crate::tags::Tag) model picks one of them based on the element type declared by the schema.
//!

use std::fmt;

use super::errors::tool::ToolError;
use super::tools::MAX_SAFE_INTEGER;

///
/// The value of an unsigned integer element.
///
/// Values up to [`MAX_SAFE_INTEGER`] are held as numbers.  Anything larger is kept as a lowercase hex string of the exact bytes that were read, so that no information is lost and the original width is preserved when writing.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unsigned {
    Int(u64),
    Hex(String),
}

impl Unsigned {
    ///
    /// Returns the numeric value, if it is held as a number.
    ///
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Unsigned::Int(val) => Some(*val),
            Unsigned::Hex(_) => None,
        }
    }
}

impl Default for Unsigned {
    fn default() -> Self {
        Unsigned::Int(0)
    }
}

impl From<u64> for Unsigned {
    fn from(val: u64) -> Self {
        Unsigned::Int(val)
    }
}

impl fmt::Display for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsigned::Int(val) => write!(f, "{}", val),
            Unsigned::Hex(hex) => write!(f, "0x{}", hex),
        }
    }
}

///
/// Reads an unsigned integer from an array slice of any length.
///
/// ## Example
///
/// ```
/// # use ebml_stream::data::{read_unsigned, Unsigned};
/// assert_eq!(Unsigned::Int(4096), read_unsigned(&[16, 0]));
/// assert_eq!(Unsigned::Hex(String::from("0107070707070707")), read_unsigned(&[1, 7, 7, 7, 7, 7, 7, 7]));
/// ```
///
pub fn read_unsigned(arr: &[u8]) -> Unsigned {
    if arr.len() <= 8 {
        let val = arr.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64);
        if val <= MAX_SAFE_INTEGER {
            return Unsigned::Int(val);
        }
    }
    Unsigned::Hex(hex::encode(arr))
}

///
/// Writes an unsigned integer.
///
/// Numbers are written with the fewest big endian bytes that hold them (at least one).  Hex strings are written verbatim.
///
/// # Errors
///
/// Returns [`ToolError::InvalidHexString`] if a hex string has an odd number of digits or contains a non hex character.
///
pub fn write_unsigned(val: &Unsigned) -> Result<Vec<u8>, ToolError> {
    match val {
        Unsigned::Int(num) => {
            let bytes = num.to_be_bytes();
            let first_value_index = bytes.iter().take(7).take_while(|b| **b == 0).count();
            Ok(bytes[first_value_index..].to_vec())
        },
        Unsigned::Hex(hex) => hex::decode(hex).map_err(|_| ToolError::InvalidHexString(hex.clone())),
    }
}

///
/// Writes an unsigned integer as exactly `width` big endian bytes.
///
/// A width of zero is only possible for zero.  Hex strings are written verbatim whatever the width.
///
/// # Errors
///
/// Returns [`ToolError::UnrepresentableValue`] if a number does not fit the width or the width is above 8.
///
/// ## Example
///
/// ```
/// # use ebml_stream::data::{write_unsigned_with_width, Unsigned};
/// assert_eq!(vec![0x00, 0x00, 0x07], write_unsigned_with_width(&Unsigned::Int(7), 3).unwrap());
/// assert!(write_unsigned_with_width(&Unsigned::Int(0), 0).unwrap().is_empty());
/// assert!(write_unsigned_with_width(&Unsigned::Int(256), 1).is_err());
/// ```
///
pub fn write_unsigned_with_width(val: &Unsigned, width: usize) -> Result<Vec<u8>, ToolError> {
    match val {
        Unsigned::Int(num) => {
            let fits = match width {
                0 => *num == 0,
                1..=7 => *num >> (8 * width) == 0,
                8 => true,
                _ => false,
            };
            if !fits {
                return Err(ToolError::UnrepresentableValue(*num));
            }
            Ok(num.to_be_bytes()[8 - width..].to_vec())
        },
        Unsigned::Hex(_) => write_unsigned(val),
    }
}

///
/// Reads a signed integer from an array slice of length 0 to 8, sign extending from the highest bit.
///
/// An empty slice reads as zero.
///
/// # Errors
///
/// Slices longer than 8 bytes return [`ToolError::ReadSignedMismatch`].
///
/// ## Example
///
/// ```
/// # use ebml_stream::data::read_signed;
/// assert_eq!(-100_000, read_signed(&[0xfe, 0x79, 0x60]).unwrap());
/// assert_eq!(100_000, read_signed(&[0x01, 0x86, 0xa0]).unwrap());
/// ```
///
pub fn read_signed(arr: &[u8]) -> Result<i64, ToolError> {
    if arr.len() > 8 {
        return Err(ToolError::ReadSignedMismatch(Vec::from(arr)));
    }
    if arr.is_empty() {
        return Ok(0);
    }
    let shift = 64 - 8 * arr.len() as u32;
    let val = arr.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64);
    Ok(((val << shift) as i64) >> shift)
}

///
/// Writes a signed integer as `width` big endian two's complement bytes.
///
/// # Errors
///
/// Returns [`ToolError::UnrepresentableValue`] if the value does not fit the width, or if the width is not between 1 and 8.
///
pub fn write_signed(val: i64, width: usize) -> Result<Vec<u8>, ToolError> {
    if !(1..=8).contains(&width) {
        return Err(ToolError::UnrepresentableValue(val as u64));
    }
    let shift = 64 - 8 * width as u32;
    if (val << shift) >> shift != val {
        return Err(ToolError::UnrepresentableValue(val as u64));
    }
    Ok(val.to_be_bytes()[8 - width..].to_vec())
}

///
/// Reads a float from an array slice of length 0, 4 or 8.
///
/// This method wraps `f32` and `f64` conversions from big endian byte arrays and casts the result as an `f64`.  An empty slice reads as zero.
///
/// # Errors
///
/// Any other width returns [`ToolError::ReadFloatMismatch`].
///
pub fn read_float(arr: &[u8]) -> Result<f64, ToolError> {
    match arr.len() {
        0 => Ok(0.0),
        4 => Ok(f32::from_be_bytes(arr.try_into().map_err(|_| ToolError::ReadFloatMismatch(Vec::from(arr)))?) as f64),
        8 => Ok(f64::from_be_bytes(arr.try_into().map_err(|_| ToolError::ReadFloatMismatch(Vec::from(arr)))?)),
        _ => Err(ToolError::ReadFloatMismatch(Vec::from(arr))),
    }
}

///
/// Writes a float as a 4 byte (`f32`) or 8 byte (`f64`) big endian value.
///
pub fn write_float(val: f64, double: bool) -> Vec<u8> {
    if double {
        val.to_be_bytes().to_vec()
    } else {
        (val as f32).to_be_bytes().to_vec()
    }
}

///
/// Reads single byte text: every byte is one character (ISO 8859-1).
///
pub fn read_string(arr: &[u8]) -> String {
    arr.iter().map(|b| *b as char).collect()
}

///
/// Writes single byte text.
///
/// # Errors
///
/// Returns [`ToolError::NonLatin1Character`] for the first character above U+00FF.
///
pub fn write_string(val: &str) -> Result<Vec<u8>, ToolError> {
    val.chars()
        .map(|c| u8::try_from(c).map_err(|_| ToolError::NonLatin1Character(c)))
        .collect()
}

///
/// Reads UTF-8 text.  Invalid sequences are replaced with U+FFFD rather than failing.
///
pub fn read_utf8(arr: &[u8]) -> String {
    String::from_utf8_lossy(arr).into_owned()
}

pub fn write_utf8(val: &str) -> Vec<u8> {
    val.as_bytes().to_vec()
}
