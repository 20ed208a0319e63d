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
use crate::mlaf::mlaf;
use num_traits::MulAdd;
use std::ops::{Add, Mul};

#[inline(always)]
pub(crate) fn f_fmla(a: f64, b: f64, c: f64) -> f64 {
    mlaf(c, a, b)
}

#[inline(always)]
pub(crate) fn c_mlaf<T: Copy + Mul<T, Output = T> + Add<T, Output = T> + MulAdd<T, Output = T>>(
    a: T,
    b: T,
    c: T,
) -> T {
    mlaf(c, a, b)
}

/// Distance between `x` and a reference `ref_value` in units of the last place of `ref_value`.
///
/// Subnormal references use the fixed subnormal spacing 2^-149.
/// Returns infinity when exactly one of the values is not finite, or both are NaN.
pub fn count_ulp(x: f32, ref_value: f64) -> f64 {
    if x.is_nan() || ref_value.is_nan() {
        return f64::INFINITY;
    }
    if x.is_infinite() || ref_value.is_infinite() {
        return if x as f64 == ref_value {
            0.
        } else {
            f64::INFINITY
        };
    }
    let diff = (x as f64 - ref_value).abs();
    if diff == 0. {
        return 0.;
    }
    // exponent of the reference, clamped to binary32 normal range
    let e = ((ref_value.abs().to_bits() >> 52) as i32 - 0x3ff).max(-126);
    let ulp = f64::from_bits(((e - 23 + 0x3ff) as u64) << 52);
    diff / ulp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_ulp() {
        assert_eq!(count_ulp(1.0, 1.0), 0.);
        assert_eq!(count_ulp(f32::from_bits(0x3f800001), 1.0), 1.);
        assert_eq!(count_ulp(1.0, 1.0 + f64::from_bits(0x3e70000000000000)), 0.5);
        assert_eq!(count_ulp(f32::from_bits(2), f64::from_bits(0x36a0000000000000)), 1.);
        assert_eq!(count_ulp(f32::INFINITY, f64::INFINITY), 0.);
        assert_eq!(count_ulp(f32::MAX, f64::INFINITY), f64::INFINITY);
        assert_eq!(count_ulp(f32::NAN, 1.), f64::INFINITY);
    }

    #[test]
    fn test_f_fmla() {
        assert_eq!(f_fmla(3., 4., 5.), 17.);
        assert_eq!(c_mlaf(0.5f64, 0.5, 0.75), 1.);
    }
}
