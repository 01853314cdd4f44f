//! Primitives for reading and writing the low-bit plane of a colour channel.
//!
//! Every channel carries two bits of payload in its two least significant bits.
//! The upper six bits of the carrier are always preserved.

use crate::pixel::Rgb;

/// The mask that selects the two payload bits of a channel.
pub const LOW_MASK: u8 = 0b0000_0011;
/// The mask that selects the six carrier bits of a channel.
pub const HIGH_MASK: u8 = 0b1111_1100;
/// The largest value that can be split across the three channels of a pixel.
pub const MAX_TRIPLE_VALUE: u8 = 0b0011_1111;

/// Overwrite the two low bits of a channel with a 2-bit payload.
///
/// # Arguments
///
/// * `carrier` - The channel value into which the payload will be written.
/// * `payload` - The payload, only the two low bits of which are used.
///
#[inline]
pub const fn insert_low2(carrier: u8, payload: u8) -> u8 {
    (carrier & HIGH_MASK) | (payload & LOW_MASK)
}

/// Read the two low bits of a channel.
#[inline]
pub const fn extract_low2(value: u8) -> u8 {
    value & LOW_MASK
}

/// Zero the two low bits of a channel without inserting new data.
#[inline]
pub const fn clear_low2(value: u8) -> u8 {
    value & HIGH_MASK
}

/// The two most significant bits of a channel, shifted down into the payload position.
#[inline]
pub const fn top2(value: u8) -> u8 {
    value >> 6
}

/// Move the two low bits of a channel into the two most significant bits,
/// making them visible to a human viewer.
#[inline]
pub const fn amplify_low2(value: u8) -> u8 {
    extract_low2(value) << 6
}

/// Split a 6-bit value into three base-4 digits, least significant digit first.
///
/// # Arguments
///
/// * `value` - The value to be split. Only the low 6 bits are used.
///
#[inline]
pub fn split_to_base4_triple(value: u8) -> [u8; 3] {
    debug_assert!(
        value <= MAX_TRIPLE_VALUE,
        "{value} cannot be held within three base-4 digits"
    );

    let value = value & MAX_TRIPLE_VALUE;
    [value & LOW_MASK, (value >> 2) & LOW_MASK, (value >> 4) & LOW_MASK]
}

/// Combine three base-4 digits, least significant digit first, into a single value.
#[inline]
pub fn combine_base4_triple(digits: [u8; 3]) -> u8 {
    (extract_low2(digits[2]) << 4) | (extract_low2(digits[1]) << 2) | extract_low2(digits[0])
}

/// Write one 2-bit payload into each channel of a colour.
///
/// # Arguments
///
/// * `carrier` - The colour into which the payload will be written.
/// * `payload` - The payloads for the red, green and blue channels respectively.
///
#[inline]
pub fn insert_rgb(carrier: Rgb, payload: [u8; 3]) -> Rgb {
    Rgb::new(
        insert_low2(carrier.r, payload[0]),
        insert_low2(carrier.g, payload[1]),
        insert_low2(carrier.b, payload[2]),
    )
}

/// Read the 2-bit payloads of the red, green and blue channels of a colour.
#[inline]
pub fn extract_rgb(colour: Rgb) -> [u8; 3] {
    colour.channels().map(extract_low2)
}

#[cfg(test)]
mod tests_bit_plane {
    use super::*;

    #[test]
    fn test_insert_low2_preserves_high_bits() {
        for carrier in 0..=255u8 {
            for payload in 0..4u8 {
                let v = insert_low2(carrier, payload);
                assert_eq!(v & HIGH_MASK, carrier & HIGH_MASK);
                assert_eq!(extract_low2(v), payload);
            }
        }
    }

    #[test]
    fn test_insert_low2_ignores_high_payload_bits() {
        assert_eq!(insert_low2(0b1010_1000, 0b1111_1101), 0b1010_1001);
    }

    #[test]
    fn test_clear_low2_matches_division() {
        for v in 0..=255u8 {
            assert_eq!(clear_low2(v), (v / 4) * 4);
        }
    }

    #[test]
    fn test_top2_and_amplify() {
        assert_eq!(top2(0b1100_0000), 0b11);
        assert_eq!(top2(0b0111_1111), 0b01);
        assert_eq!(amplify_low2(0b0000_0010), 0b1000_0000);
        assert_eq!(amplify_low2(0b1111_1100), 0);
    }

    #[test]
    fn test_base4_triples() {
        assert_eq!(split_to_base4_triple(0), [0, 0, 0]);
        assert_eq!(split_to_base4_triple(8), [0, 2, 0]);
        assert_eq!(split_to_base4_triple(27), [3, 2, 1]);
        assert_eq!(split_to_base4_triple(63), [3, 3, 3]);

        for v in 0..=MAX_TRIPLE_VALUE {
            assert_eq!(combine_base4_triple(split_to_base4_triple(v)), v);
        }
    }

    #[test]
    fn test_rgb_payload() {
        let c = insert_rgb(Rgb::new(255, 0, 130), [0, 3, 1]);

        assert_eq!(c, Rgb::new(252, 3, 129));
        assert_eq!(extract_rgb(c), [0, 3, 1]);
    }
}
