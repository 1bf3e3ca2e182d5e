/// Writes one bit into the least significant bit of a color channel value.
///
/// Only the lowest bit is touched, the 7 high bits stay as they are, so the
/// value moves by at most 1.
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

/// Reads the least significant bit of a color channel value.
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        self & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_force_lsb_for_every_value() {
        for v in 0..=u8::MAX {
            let mut set = v;
            set.hide_bit(true);
            assert_eq!(set, v | 1);
            assert!(set.unveil_bit());

            let mut cleared = v;
            cleared.hide_bit(false);
            assert_eq!(cleared, v & 0xFE);
            assert!(!cleared.unveil_bit());

            assert!(set.abs_diff(v) <= 1 && cleared.abs_diff(v) <= 1);
        }
    }

    #[test]
    fn should_keep_even_values_when_hiding_zero() {
        let mut c = 200_u8;
        c.hide_bit(false);
        assert_eq!(c, 200);

        let mut c = 201_u8;
        c.hide_bit(false);
        assert_eq!(c, 200);

        let mut c = 255_u8;
        c.hide_bit(true);
        assert_eq!(c, 255);
    }
}
