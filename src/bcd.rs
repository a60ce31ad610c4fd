//! Packed BCD conversion used by every DS1337 register.

/// Encode a binary value into a packed BCD byte: tens digit in the high
/// nibble, units digit in the low nibble.
///
/// Defined for inputs 0-99. Larger inputs are not guarded against: the tens
/// digit is truncated through `(value / 10) & 0x0F`, so e.g. `100` encodes
/// as `0xA0`.
pub fn encode_bcd(value: u8) -> u8 {
    (((value / 10) & 0x0f) << 4) + value % 10
}

/// Decode a packed BCD byte: high nibble times ten plus low nibble.
///
/// Nibbles above 9 are not rejected; a malformed byte such as `0xFA` decodes
/// to a value outside 0-99 (here 160) without an error.
pub fn decode_bcd(byte: u8) -> u8 {
    (byte >> 4) * 10 + (byte & 0x0f)
}

#[cfg(test)]
mod tests {
    use super::{decode_bcd, encode_bcd};

    #[test]
    fn round_trips_all_two_digit_values() {
        for value in 0..=99 {
            assert_eq!(decode_bcd(encode_bcd(value)), value);
        }
    }

    #[test]
    fn encodes_known_values() {
        assert_eq!(encode_bcd(0), 0x00);
        assert_eq!(encode_bcd(59), 0x59);
        assert_eq!(encode_bcd(99), 0x99);
    }

    #[test]
    fn decodes_known_values() {
        assert_eq!(decode_bcd(0x00), 0);
        assert_eq!(decode_bcd(0x59), 59);
    }

    #[test]
    fn truncates_values_above_99() {
        // Tens digit wraps through the nibble mask instead of erroring.
        assert_eq!(encode_bcd(100), 0xA0);
        assert_eq!(encode_bcd(255), 0x95);
    }

    #[test]
    fn passes_malformed_nibbles_through() {
        assert_eq!(decode_bcd(0xFA), 160);
    }
}
