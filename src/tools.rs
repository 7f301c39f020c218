//!
//! Contains the variable-length integer ("vint") tools used throughout the codec.
//!
//! EBML uses the same self-describing encoding for element ids and element sizes: the number of leading zero bits in the first byte, plus one, gives the total length of the field (1 to 8 bytes).
//!

use super::errors::tool::ToolError;
use super::tags::TagSize;

///
/// The largest value this crate will write as a vint: 2^53.
///
/// Decoded 8 byte sizes above this ceiling are reported as [`TagSize::Unknown`] rather than as a lossy number.
///
pub const MAX_SAFE_INTEGER: u64 = 1 << 53;

///
/// The 8 byte "unknown size" marker.
///
pub const UNKNOWN_SIZE_VINT: [u8; 8] = [0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];

///
/// Trait to enable easy serialization to a vint.
///
/// This is only available for types that can be cast as `u64`.
///
/// ```
/// use ebml_stream::tools::Vint;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// assert_eq!(vec![0x81], 1u64.as_vint()?);
/// assert_eq!(vec![0x40, 0x7f], 127u64.as_vint()?);
/// assert_eq!(vec![0x01, 0, 0, 0, 0, 0, 0, 0x05], 5u64.as_vint_with_length(8)?);
/// # Ok(())
/// # }
/// ```
pub trait Vint: Into<u64> + Copy {
    ///
    /// Returns a representation of the current value as a vint array.
    ///
    /// The shortest length is chosen whose payload is not all ones - the all ones payload is reserved as the "unknown size" marker.
    ///
    /// # Errors
    ///
    /// This can return an error if the value is larger than [`MAX_SAFE_INTEGER`].
    ///
    fn as_vint(&self) -> Result<Vec<u8>, ToolError> {
        let val: u64 = (*self).into();
        check_size_u64(val, 8)?;
        let mut length = 1;
        while length < 8 {
            if val < (1 << (7 * length)) - 1 {
                break;
            }
            length += 1;
        }

        Ok(as_vint_no_check_u64(val, length))
    }

    ///
    /// Returns a representation of the current value as a vint array with a specified length.
    ///
    /// # Errors
    ///
    /// This can return an error if the length is not between 1 and 8 or if the value does not fit in that length.
    ///
    fn as_vint_with_length(&self, length: usize) -> Result<Vec<u8>, ToolError> {
        if !(1..=8).contains(&length) {
            return Err(ToolError::InvalidVintLength(length));
        }
        let val: u64 = (*self).into();
        check_size_u64(val, length)?;
        Ok(as_vint_no_check_u64(val, length))
    }
}

impl Vint for u64 { }
impl Vint for u32 { }
impl Vint for u16 { }
impl Vint for u8 { }

#[inline]
fn check_size_u64(val: u64, max_length: usize) -> Result<(), ToolError> {
    if val > MAX_SAFE_INTEGER || val >= (1 << (max_length * 7)) - 1 {
        Err(ToolError::UnrepresentableValue(val))
    } else {
        Ok(())
    }
}

#[inline]
fn as_vint_no_check_u64(val: u64, length: usize) -> Vec<u8> {
    let bytes: [u8; 8] = val.to_be_bytes();
    let mut result: Vec<u8> = Vec::from(&bytes[(8-length)..]);
    result[0] |= 1 << (8 - length);
    result
}

///
/// Reads the length of the vint starting at the beginning of the input slice.
///
/// Returns `None` if the slice is empty or does not yet hold all bytes of the vint.
///
/// # Errors
///
/// Returns [`ToolError::MalformedVint`] if the first byte is zero (a length greater than 8).
///
pub fn read_vint_length(buffer: &[u8]) -> Result<Option<usize>, ToolError> {
    let first = match buffer.first() {
        Some(first) => *first,
        None => return Ok(None),
    };

    if first == 0 {
        return Err(ToolError::MalformedVint(first));
    }

    let length = first.leading_zeros() as usize + 1;
    if length > buffer.len() {
        return Ok(None);
    }
    Ok(Some(length))
}

///
/// Reads a vint from the beginning of the input array slice.
///
/// This method returns an option with the `None` variant used to indicate there was not enough data in the buffer to completely read a vint.
///
/// The returned tuple contains the raw value of the vint (`u64`, length marker removed) and the length of the vint (`usize`).  Use [`read_vint_size`] when the vint is an element size, so that the "unknown size" marker is recognised.
///
/// # Errors
///
/// This method can return a `ToolError` if the input array cannot be read as a vint.
///
pub fn read_vint(buffer: &[u8]) -> Result<Option<(u64, usize)>, ToolError> {
    let length = match read_vint_length(buffer)? {
        Some(length) => length,
        None => return Ok(None),
    };

    let mut value = (buffer[0] as u64) & (0xFFu64 >> length);
    for item in buffer.iter().take(length).skip(1) {
        value <<= 8;
        value += *item as u64;
    }

    Ok(Some((value, length)))
}

///
/// Reads an element size vint from the beginning of the input array slice.
///
/// Behaves like [`read_vint`], but maps the reserved all ones payload (of any length) and 8 byte values above [`MAX_SAFE_INTEGER`] to [`TagSize::Unknown`].
///
pub fn read_vint_size(buffer: &[u8]) -> Result<Option<(TagSize, usize)>, ToolError> {
    Ok(read_vint(buffer)?.map(|(value, length)| (TagSize::from_vint(value, length), length)))
}

///
/// Returns the bytes of an element id as they appear in a document.
///
/// Ids keep their length marker bits, so they are written verbatim (big endian, leading zero bytes removed) rather than re-encoded as a vint.
///
pub fn id_to_bytes(id: u64) -> Vec<u8> {
    id.to_be_bytes().iter().skip_while(|&v| *v == 0u8).copied().collect()
}

///
/// Reads an element id from the beginning of the input array slice.
///
/// The returned tuple contains the id (length marker bits included) and its length in bytes.
///
pub fn read_id(buffer: &[u8]) -> Result<Option<(u64, usize)>, ToolError> {
    Ok(read_vint_length(buffer)?.map(|length| {
        let id = buffer[..length].iter().fold(0u64, |acc, b| (acc << 8) | *b as u64);
        (id, length)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_vint_sixteen() {
        let buffer = [144];
        let result = read_vint(&buffer).unwrap().expect("Reading vint failed");

        assert_eq!(16, result.0);
        assert_eq!(1, result.1);
    }

    #[test]
    fn write_vint_sixteen() {
        let result = 16u64.as_vint().expect("Writing vint failed");
        assert_eq!(vec![144u8], result);
    }

    #[test]
    fn read_vint_one_twenty_six() {
        let buffer = [254u8];
        let result = read_vint(&buffer).unwrap().expect("Reading vint failed");

        assert_eq!(126, result.0);
        assert_eq!(1, result.1);
    }

    #[test]
    fn write_vint_one_twenty_seven_avoids_unknown_marker() {
        let result = 127u64.as_vint().expect("Writing vint failed");
        assert_eq!(vec![0x40u8, 0x7f], result);
    }

    #[test]
    fn read_vint_two_hundred() {
        let buffer = [64, 200];
        let result = read_vint(&buffer).unwrap().expect("Reading vint failed");

        assert_eq!(200, result.0);
        assert_eq!(2, result.1);
    }

    #[test]
    fn write_vint_two_hundred() {
        let result = 200u64.as_vint().expect("Writing vint failed");
        assert_eq!(vec![64u8, 200u8], result);
    }

    #[test]
    fn write_vint_length_boundaries() {
        assert_eq!(vec![0x7f, 0xfe], (2u64.pow(14) - 2).as_vint().unwrap());
        assert_eq!(vec![0x20, 0x3f, 0xff], (2u64.pow(14) - 1).as_vint().unwrap());
        assert_eq!(vec![0x10, 0x1f, 0xff, 0xff], (2u64.pow(21) - 1).as_vint().unwrap());
        assert_eq!(vec![0x03, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe], (2u64.pow(49) - 2).as_vint().unwrap());
        assert_eq!(vec![0x01, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], (2u64.pow(49) - 1).as_vint().unwrap());
    }

    #[test]
    fn read_id_for_ebml_tag() {
        let buffer = [0x1a, 0x45, 0xdf, 0xa3, 0x84];
        let result = read_id(&buffer).unwrap().expect("Reading id failed");

        assert_eq!(0x1a45dfa3, result.0);
        assert_eq!(4, result.1);
    }

    #[test]
    fn read_vint_for_ebml_tag() {
        let buffer = [0x1a, 0x45, 0xdf, 0xa3];
        let result = read_vint(&buffer).unwrap().expect("Reading vint failed");

        assert_eq!(0x0a45dfa3, result.0);
        assert_eq!(4, result.1);
    }

    #[test]
    fn id_bytes_are_verbatim() {
        assert_eq!(vec![0x1a, 0x45, 0xdf, 0xa3], id_to_bytes(0x1a45dfa3));
        assert_eq!(vec![0xa3], id_to_bytes(0xa3));
    }

    #[test]
    fn read_vint_very_long() {
        let buffer = [1, 0, 0, 0, 0, 0, 0, 1];
        let result = read_vint(&buffer).unwrap().expect("Reading vint failed");

        assert_eq!(1, result.0);
        assert_eq!(8, result.1);
    }

    #[test]
    fn write_vint_very_long() {
        let result = 1u64.as_vint_with_length(8).expect("Writing vint failed");
        assert_eq!(vec![1, 0, 0, 0, 0, 0, 0, 1], result);
    }

    #[test]
    fn read_vint_needs_more_data() {
        let buffer = [1, 0, 0, 0];
        let result = read_vint(&buffer).expect("Reading vint failed");
        assert!(result.is_none());

        assert!(read_vint(&[]).expect("Reading vint failed").is_none());
    }

    #[test]
    fn read_vint_zero_first_byte_is_malformed() {
        let buffer = [0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff];
        assert_eq!(Err(ToolError::MalformedVint(0)), read_vint(&buffer));
    }

    #[test]
    fn max_safe_integer_round_trips() {
        let bytes = MAX_SAFE_INTEGER.as_vint().expect("Writing vint failed");
        assert_eq!(vec![0x01, 0x20, 0, 0, 0, 0, 0, 0], bytes);
        let (size, length) = read_vint_size(&bytes).unwrap().unwrap();
        assert_eq!(TagSize::Known(MAX_SAFE_INTEGER), size);
        assert_eq!(8, length);
    }

    #[test]
    fn sizes_above_max_safe_integer_are_unknown() {
        let buffer = [0x01, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(Some((TagSize::Unknown, 8)), read_vint_size(&buffer).unwrap());
    }

    #[test]
    fn all_ones_sizes_are_unknown() {
        assert_eq!(Some((TagSize::Unknown, 1)), read_vint_size(&[0xff]).unwrap());
        assert_eq!(Some((TagSize::Unknown, 2)), read_vint_size(&[0x7f, 0xff]).unwrap());
        assert_eq!(Some((TagSize::Unknown, 8)), read_vint_size(&UNKNOWN_SIZE_VINT).unwrap());
    }

    #[test]
    fn too_big_for_vint() {
        assert_eq!(Err(ToolError::UnrepresentableValue(MAX_SAFE_INTEGER + 1)), (MAX_SAFE_INTEGER + 1).as_vint());
        assert_eq!(Err(ToolError::UnrepresentableValue(1 << 56)), (1u64 << 56).as_vint());
    }

    #[test]
    fn forced_length_must_fit() {
        assert_eq!(Err(ToolError::UnrepresentableValue(127)), 127u64.as_vint_with_length(1));
        assert_eq!(Err(ToolError::InvalidVintLength(9)), 1u64.as_vint_with_length(9));
        assert_eq!(Err(ToolError::InvalidVintLength(0)), 1u64.as_vint_with_length(0));
    }

    #[test]
    fn vint_encode_decode_range() {
        for val in (0..500_000u64).chain((MAX_SAFE_INTEGER - 1000)..=MAX_SAFE_INTEGER) {
            let bytes = val.as_vint().unwrap();
            let (result, length) = read_vint(bytes.as_slice()).unwrap().unwrap();
            assert_eq!(val, result);
            assert_eq!(bytes.len(), length);
        }
    }
}
