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
use crate::math::bits::f32_from_bits;
use crate::math::common::{c_mlaf, f_fmla};
use crate::math::config::{POWF_LOG2_TABLE_BITS, POWF_SCALE_BITS};
use crate::math::estrin::*;
use crate::math::powf_data::POWF_LOG2_DATA;

/// Start of the reduced significand range, z is in [OFF, 2 * OFF).
const OFF: u32 = 0x3f33_0000;

/// Computes `log2(x) * POWF_SCALE` for positive `x` given as raw bits.
///
/// Subnormal input must be normalized by caller, so biased exponent of `ix`
/// may be negative (wrapped). Relative error is 1.83 * 2^-33.
#[inline(always)]
pub(crate) fn log2_inline(ix: u32) -> f64 {
    // x = 2^k z; where z is in range [OFF, 2*OFF] and exact.
    let tmp = ix.wrapping_sub(OFF);
    let i = ((tmp >> (23 - POWF_LOG2_TABLE_BITS)) % (1 << POWF_LOG2_TABLE_BITS)) as usize;
    let top = tmp & 0xff80_0000;
    let iz = ix.wrapping_sub(top);
    // arithmetic shift
    let k = (top as i32) >> (23 - POWF_SCALE_BITS);
    let entry = POWF_LOG2_DATA.tab[i];
    let z = f32_from_bits(iz) as f64;

    // log2(x) = log1p(z/c-1)/ln2 + log2(c) + k
    let r = f_fmla(z, entry.invc, -1.);
    let y0 = entry.logc + k as f64;

    let r2 = r * r;
    let r4 = r2 * r2;
    let a = &POWF_LOG2_DATA.poly;
    poly6!(r, r2, r4, a[0], a[1], a[2], a[3], a[4], y0)
}
