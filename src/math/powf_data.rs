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
//! Reduction tables and polynomial coefficients shared by the powf kernels.
//!
//! log2 table:
//!   The reduced significand z in [OFF, 2 * OFF), OFF = 0x3f330000, is split into N
//!   subintervals by the top mantissa bits of bits(z) - OFF, c is near the center of
//!   subinterval i, invc = 1/c rounded to double, logc = -log2(invc) rounded to double.
//!   For i = 9, c = 1 so the reduction is exact around x = 1.
//!
//! exp2 table:
//!   tab[i] = bits(2^(i/N)) - (i << 52)/N, so adding k << (52 - EXP2F_TABLE_BITS)
//!   to tab[k % N] produces bits(2^(k/N)) with a single integer add.
//!
//! Polynomials (relative error):
//!   log2: log1p(r)/ln2 ~ A0 r^5 + A1 r^4 + A2 r^3 + A3 r^2 + A4 r, 1.83 * 2^-33 for |r| < 0x1.1p-5
//!   exp2: 2^r ~ C0 r^3 + C1 r^2 + C2 r + 1, 1.69 * 2^-34 for |r| <= 1/64
use crate::math::config::{EXP2F_TABLE_BITS, POWF_LOG2_TABLE_BITS, POWF_SCALE, TOINT_INTRINSICS};

/// Bits of (invc, logc)
#[rustfmt::skip]
const POWF_LOG2_TAB_BITS: [(u64, u64); 1 << POWF_LOG2_TABLE_BITS] = [
    (0x3ff661ec79f8f3be, 0xbfdefec65b963019),
    (0x3ff571ed4aaf883d, 0xbfdb0b6832d4fca4),
    (0x3ff49539f0f010b0, 0xbfd7418b0a1fb77b),
    (0x3ff3c995b0b80385, 0xbfd39de91a6dcf7b),
    (0x3ff30d190c8864a5, 0xbfd01d9bf3f2b631),
    (0x3ff25e227b0b8ea0, 0xbfc97c1d1b3b7af0),
    (0x3ff1bb4a4a1a343f, 0xbfc2f9e393af3c9f),
    (0x3ff12358f08ae5ba, 0xbfb960cbbf788d5c),
    (0x3ff0953f419900a7, 0xbfaa6f9db6475fce),
    (0x3ff0000000000000, 0x0000000000000000),
    (0x3fee608cfd9a47ac, 0x3fb338ca9f24f53d),
    (0x3feca4b31f026aa0, 0x3fc476a9543891ba),
    (0x3feb2036576afce6, 0x3fce840b4ac4e4d2),
    (0x3fe9c2d163a1aa2d, 0x3fd40645f0c6651c),
    (0x3fe886e6037841ed, 0x3fd88e9c2c1b9ff8),
    (0x3fe767dcf5534862, 0x3fdce0a44eb17bcc),
];

/// Bits of A0..A4
const POWF_LOG2_POLY_BITS: [u64; 5] = [
    0x3fd27616c9496e0b,
    0xbfd71969a075c67a,
    0x3fdec70a6ca7badd,
    0xbfe7154748bef6c8,
    0x3ff71547652ab82b,
];

#[derive(Debug, Copy, Clone)]
pub(crate) struct Log2Entry {
    pub(crate) invc: f64,
    pub(crate) logc: f64,
}

pub(crate) struct PowfLog2Data {
    pub(crate) tab: [Log2Entry; 1 << POWF_LOG2_TABLE_BITS],
    /// Pre-multiplied by [POWF_SCALE]
    pub(crate) poly: [f64; 5],
}

const fn make_log2_data() -> PowfLog2Data {
    let mut tab = [Log2Entry {
        invc: 0.,
        logc: 0.,
    }; 1 << POWF_LOG2_TABLE_BITS];
    let mut i = 0usize;
    while i < tab.len() {
        let (invc, logc) = POWF_LOG2_TAB_BITS[i];
        tab[i] = Log2Entry {
            invc: f64::from_bits(invc),
            logc: f64::from_bits(logc) * POWF_SCALE,
        };
        i += 1;
    }
    let mut poly = [0f64; 5];
    let mut i = 0usize;
    while i < poly.len() {
        poly[i] = f64::from_bits(POWF_LOG2_POLY_BITS[i]) * POWF_SCALE;
        i += 1;
    }
    PowfLog2Data { tab, poly }
}

pub(crate) static POWF_LOG2_DATA: PowfLog2Data = make_log2_data();

#[rustfmt::skip]
pub(crate) static EXP2F_TAB: [u64; 1 << EXP2F_TABLE_BITS] = [
    0x3ff0000000000000, 0x3fefd9b0d3158574, 0x3fefb5586cf9890f, 0x3fef9301d0125b51,
    0x3fef72b83c7d517b, 0x3fef54873168b9aa, 0x3fef387a6e756238, 0x3fef1e9df51fdee1,
    0x3fef06fe0a31b715, 0x3feef1a7373aa9cb, 0x3feedea64c123422, 0x3feece086061892d,
    0x3feebfdad5362a27, 0x3feeb42b569d4f82, 0x3feeab07dd485429, 0x3feea47eb03a5585,
    0x3feea09e667f3bcd, 0x3fee9f75e8ec5f74, 0x3feea11473eb0187, 0x3feea589994cce13,
    0x3feeace5422aa0db, 0x3feeb737b0cdc5e5, 0x3feec49182a3f090, 0x3feed503b23e255d,
    0x3feee89f995ad3ad, 0x3feeff76f2fb5e47, 0x3fef199bdd85529c, 0x3fef3720dcef9069,
    0x3fef5818dcfba487, 0x3fef7c97337b9b5f, 0x3fefa4afa2a490da, 0x3fefd0765b6e4540,
];

const EXP2F_N: f64 = (1u32 << EXP2F_TABLE_BITS) as f64;

/// C0..C2, scaled by N^-3, N^-2, N^-1 when the reduced argument is N * r
pub(crate) const EXP2F_POLY: [f64; 3] = if TOINT_INTRINSICS {
    [
        f64::from_bits(0x3fac6af84b912394) / (EXP2F_N * EXP2F_N * EXP2F_N),
        f64::from_bits(0x3fcebfce50fac4f3) / (EXP2F_N * EXP2F_N),
        f64::from_bits(0x3fe62e42ff0c52d6) / EXP2F_N,
    ]
} else {
    [
        f64::from_bits(0x3fac6af84b912394),
        f64::from_bits(0x3fcebfce50fac4f3),
        f64::from_bits(0x3fe62e42ff0c52d6),
    ]
};

/// 0x1.8p52 / N, adding it rounds a value in the exp2 range to a multiple of 1/N
pub(crate) const EXP2F_SHIFT_SCALED: f64 = f64::from_bits(0x4338000000000000) / EXP2F_N;
