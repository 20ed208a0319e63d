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
use crate::math::bits::{f64_from_bits, f64_to_bits};
use crate::math::common::c_mlaf;
use crate::math::config::{EXP2F_TABLE_BITS, TOINT_INTRINSICS};
use crate::math::estrin::*;
use crate::math::powf_data::{EXP2F_POLY, EXP2F_SHIFT_SCALED, EXP2F_TAB};

/// Sign of the final result, carried from the special case dispatch into the exp2 kernel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub(crate) struct SignBias(bool);

impl SignBias {
    pub(crate) const POSITIVE: SignBias = SignBias(false);
    pub(crate) const NEGATIVE: SignBias = SignBias(true);

    #[inline(always)]
    pub(crate) const fn is_negative(self) -> bool {
        self.0
    }

    /// Integer added to the table index so that shifting it into the exponent
    /// field also carries into the sign bit.
    #[inline(always)]
    const fn index_bias(self) -> u64 {
        if self.0 {
            1 << (EXP2F_TABLE_BITS + 11)
        } else {
            0
        }
    }

    /// Applies the sign to a magnitude.
    #[inline(always)]
    pub(crate) const fn apply(self, v: f32) -> f32 {
        if self.is_negative() { -v } else { v }
    }
}

/// Splits `N*x` into `k + r` with r in [-1/2, 1/2], `xd` holds `N*x`.
#[inline(always)]
fn reduce_toint(xd: f64) -> (u64, f64) {
    let kd = xd.round_ties_even();
    (kd as i64 as u64, xd - kd)
}

/// Splits `x` into `k/N + r` with r in [-1/(2N), 1/(2N)].
///
/// Low bits of the returned index hold `k`, upper bits are the shift constant and are
/// discarded by the table lookup and the exponent shift.
#[inline(always)]
fn reduce_shift(xd: f64) -> (u64, f64) {
    let kd = xd + EXP2F_SHIFT_SCALED;
    let ki = f64_to_bits(kd);
    // k/N
    let kd = kd - EXP2F_SHIFT_SCALED;
    (ki, xd - kd)
}

/// Computes `±2^xd`, where `xd` is scaled by `POWF_SCALE`.
///
/// Unscaled `xd` must be in [-1021, 1023], result is rounded to binary32 by the caller.
/// Relative error is 1.69 * 2^-34.
#[inline(always)]
pub(crate) fn exp2_inline(xd: f64, sign_bias: SignBias) -> f64 {
    let (ki, r) = if TOINT_INTRINSICS {
        reduce_toint(xd)
    } else {
        reduce_shift(xd)
    };

    // exp2(x) = 2^(k/N) * 2^r ~= s * (C0*r^3 + C1*r^2 + C2*r + 1)
    let t = EXP2F_TAB[(ki % (1 << EXP2F_TABLE_BITS)) as usize];
    let ski = ki.wrapping_add(sign_bias.index_bias());
    let t = t.wrapping_add(ski.wrapping_shl(52 - EXP2F_TABLE_BITS));
    let s = f64_from_bits(t);
    let c = &EXP2F_POLY;
    let r2 = r * r;
    poly4!(r, r2, c[0], c[1], c[2], 1.) * s
}
