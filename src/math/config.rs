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
//! Build time configuration of `powf`.
//!
//! Everything here is resolved from Cargo features at compile time, the kernels
//! branch on these constants only, so disabled paths are removed entirely.

/// log2 of the number of subintervals in the log2 reduction table.
pub const POWF_LOG2_TABLE_BITS: u32 = 4;

/// log2 of the number of subintervals in the exp2 reduction table.
pub const EXP2F_TABLE_BITS: u32 = 5;

/// Hardware round to nearest integer is used in the exp2 reduction.
pub(crate) const TOINT_INTRINSICS: bool = cfg!(feature = "toint-intrinsics");

/// Pole results are reported as divide by zero.
pub(crate) const WANT_ERRNO: bool = cfg!(feature = "errno");

/// Results just above the hard underflow threshold are reported as underflow.
pub(crate) const WANT_ERRNO_UFLOW: bool = cfg!(feature = "errno-uflow");

/// log2 of [POWF_SCALE].
pub(crate) const POWF_SCALE_BITS: u32 = if TOINT_INTRINSICS {
    EXP2F_TABLE_BITS
} else {
    0
};

/// Scale of the logarithm produced by the log2 kernel.
///
/// With hardware rounding log2(x) is produced already multiplied by the exp2 table size,
/// so the exp2 kernel rounds it directly to the table index.
pub const POWF_SCALE: f64 = (1u32 << POWF_SCALE_BITS) as f64;

const _: () = assert!(POWF_LOG2_TABLE_BITS < 23 && EXP2F_TABLE_BITS < 23);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_consistent() {
        if TOINT_INTRINSICS {
            assert_eq!(POWF_SCALE, (1 << EXP2F_TABLE_BITS) as f64);
        } else {
            assert_eq!(POWF_SCALE, 1.);
        }
        assert!(POWF_SCALE.log2().fract() == 0.);
    }
}
