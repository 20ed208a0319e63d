/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::math::bits::{
    EXP_BIAS_F32, EXP_MASK_F32, MANTISSA_BITS_F32, abs_bits_f32, biased_exponent_f32,
    f32_to_bits, mantissa_f32,
};

/// Class of a binary32 encoding as seen by the special case dispatch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FloatClass {
    /// Positive or negative zero.
    Zero,
    /// Positive or negative infinity.
    Infinite,
    /// Quiet or signaling NaN.
    Nan,
    /// Any other value, normal or subnormal.
    Finite,
}

/// Integrality of a binary32 value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Integrality {
    /// Has a fractional part, or is infinite or NaN.
    NotInteger,
    /// Odd integral value.
    OddInteger,
    /// Even integral value, including zero and every value at or above 2^24.
    EvenInteger,
}

/// True for zero, infinity or NaN of either sign.
///
/// `2 * bits - 1` wraps zero around to the maximum value, while all encodings with
/// all-ones exponent land at or above `2 * EXP_MASK - 1`.
#[inline(always)]
pub(crate) const fn zero_inf_nan(bits: u32) -> bool {
    bits.wrapping_shl(1).wrapping_sub(1) >= (EXP_MASK_F32 << 1) - 1
}

/// Classifies encoding of binary32 value
#[inline]
pub(crate) const fn classify(bits: u32) -> FloatClass {
    let abs = abs_bits_f32(bits);
    if abs == 0 {
        FloatClass::Zero
    } else if biased_exponent_f32(abs) != 0xff {
        FloatClass::Finite
    } else if mantissa_f32(abs) == 0 {
        FloatClass::Infinite
    } else {
        FloatClass::Nan
    }
}

/// Classifies binary32 value
#[inline]
pub fn classify_f32(x: f32) -> FloatClass {
    classify(f32_to_bits(x))
}

/// Checks if binary32 pattern is an integral value and its parity.
///
/// Zero is an even integer, infinities and NaNs are not integers at all.
#[inline]
pub(crate) const fn check_integer_bits(bits: u32) -> Integrality {
    let e = biased_exponent_f32(bits);
    if e < EXP_BIAS_F32 {
        // |x| < 1
        return if abs_bits_f32(bits) == 0 {
            Integrality::EvenInteger
        } else {
            Integrality::NotInteger
        };
    }
    if e == 0xff {
        return Integrality::NotInteger;
    }
    if e > EXP_BIAS_F32 + MANTISSA_BITS_F32 {
        return Integrality::EvenInteger;
    }
    let unit = 1u32 << (EXP_BIAS_F32 + MANTISSA_BITS_F32 - e);
    if bits & (unit - 1) != 0 {
        return Integrality::NotInteger;
    }
    if bits & unit != 0 {
        return Integrality::OddInteger;
    }
    Integrality::EvenInteger
}

/// Checks if value is an integer and if so whether it is odd or even.
///
/// # Example
///
/// ```
/// use powf32::{check_integer, Integrality};
///
/// assert_eq!(check_integer(3.0), Integrality::OddInteger);
/// assert_eq!(check_integer(-4.0), Integrality::EvenInteger);
/// assert_eq!(check_integer(0.5), Integrality::NotInteger);
/// ```
#[inline]
pub fn check_integer(x: f32) -> Integrality {
    check_integer_bits(f32_to_bits(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_inf_nan() {
        for x in [0f32, -0., f32::INFINITY, f32::NEG_INFINITY, f32::NAN, -f32::NAN] {
            assert!(zero_inf_nan(f32_to_bits(x)), "{x} must be special");
        }
        assert!(zero_inf_nan(0x7f80_0001));
        for x in [1f32, -1., f32::MAX, f32::MIN, f32::MIN_POSITIVE, -f32::MIN_POSITIVE] {
            assert!(!zero_inf_nan(f32_to_bits(x)), "{x} must not be special");
        }
        assert!(!zero_inf_nan(1));
        assert!(!zero_inf_nan(0x8000_0001));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify_f32(0.), FloatClass::Zero);
        assert_eq!(classify_f32(-0.), FloatClass::Zero);
        assert_eq!(classify_f32(f32::NEG_INFINITY), FloatClass::Infinite);
        assert_eq!(classify_f32(f32::NAN), FloatClass::Nan);
        assert_eq!(classify(0x7f80_0001), FloatClass::Nan);
        assert_eq!(classify(1), FloatClass::Finite);
        assert_eq!(classify_f32(-3.5), FloatClass::Finite);
    }

    #[test]
    fn test_check_integer() {
        assert_eq!(check_integer(0.), Integrality::EvenInteger);
        assert_eq!(check_integer(-0.), Integrality::EvenInteger);
        assert_eq!(check_integer(1.), Integrality::OddInteger);
        assert_eq!(check_integer(-3.), Integrality::OddInteger);
        assert_eq!(check_integer(2.), Integrality::EvenInteger);
        assert_eq!(check_integer(0.5), Integrality::NotInteger);
        assert_eq!(check_integer(2.5), Integrality::NotInteger);
        assert_eq!(check_integer(f32::from_bits(1)), Integrality::NotInteger);
        // 2^23 + 1 is the largest odd value with a unit bit
        assert_eq!(check_integer(8388609.), Integrality::OddInteger);
        assert_eq!(check_integer(16777216.), Integrality::EvenInteger);
        assert_eq!(check_integer(f32::MAX), Integrality::EvenInteger);
        assert_eq!(check_integer(f32::INFINITY), Integrality::NotInteger);
        assert_eq!(check_integer(f32::NAN), Integrality::NotInteger);
    }
}
