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
//! Lossless reinterpretation of binary32 and binary64 values as same width integers.
//!
//! All conversions here are total and branch free, `from(to(x))` returns the
//! exact same encoding for every input including every NaN payload.

pub(crate) const SIGN_MASK_F32: u32 = 0x8000_0000;
pub(crate) const EXP_MASK_F32: u32 = 0x7f80_0000;
pub(crate) const MANTISSA_MASK_F32: u32 = 0x007f_ffff;
pub(crate) const QUIET_BIT_F32: u32 = 0x0040_0000;
pub(crate) const MANTISSA_BITS_F32: u32 = 23;
pub(crate) const EXP_BIAS_F32: u32 = 0x7f;
/// Smallest positive normal binary32 encoding.
pub(crate) const MIN_NORMAL_F32: u32 = 0x0080_0000;
/// Encoding of `1.0f32`.
pub(crate) const ONE_F32: u32 = 0x3f80_0000;

#[inline(always)]
pub(crate) const fn f32_to_bits(x: f32) -> u32 {
    x.to_bits()
}

#[inline(always)]
pub(crate) const fn f32_from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

#[inline(always)]
pub(crate) const fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
pub(crate) const fn f64_from_bits(bits: u64) -> f64 {
    f64::from_bits(bits)
}

#[inline(always)]
pub(crate) const fn sign_f32(bits: u32) -> bool {
    bits & SIGN_MASK_F32 != 0
}

#[inline(always)]
pub(crate) const fn biased_exponent_f32(bits: u32) -> u32 {
    (bits & EXP_MASK_F32) >> MANTISSA_BITS_F32
}

#[inline(always)]
pub(crate) const fn mantissa_f32(bits: u32) -> u32 {
    bits & MANTISSA_MASK_F32
}

/// Clears the sign bit.
#[inline(always)]
pub(crate) const fn abs_bits_f32(bits: u32) -> u32 {
    bits & !SIGN_MASK_F32
}

/// Signaling NaN has the quiet bit clear and a nonzero payload.
#[inline]
pub(crate) const fn is_signaling_nan_f32(bits: u32) -> bool {
    // Flipping the quiet bit maps sNaN above the quiet NaN boundary and qNaN below it.
    (bits ^ QUIET_BIT_F32).wrapping_shl(1) > (EXP_MASK_F32 | QUIET_BIT_F32).wrapping_shl(1)
}
