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
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]
#![deny(unreachable_pub)]
//! Single precision `pow` built from a table driven base-2 logarithm and a table driven
//! base-2 exponential, with every IEEE-754 special case resolved before the common path.
//!
//! ULP error of [f_powf] is below 0.82 over the whole binary32 domain.
//!
//! # Example
//!
//! ```
//! use powf32::{f_powf, f_powf_checked, MathErrorKind};
//!
//! assert_eq!(f_powf(2.0, 10.0), 1024.0);
//! assert_eq!(f_powf(-8.0, 3.0), -512.0);
//!
//! let err = f_powf_checked(2.0, 1000.0).unwrap_err();
//! assert_eq!(err.kind(), MathErrorKind::Overflow);
//! assert_eq!(err.value(), f32::INFINITY);
//! ```
mod err;
/// Table driven kernels and the special value dispatch of `powf`.
mod math;
mod mlaf;

pub use err::{MathError, MathErrorKind};
pub use math::{
    EXP2F_TABLE_BITS, FloatClass, Integrality, POWF_LOG2_TABLE_BITS, POWF_SCALE, check_integer,
    classify_f32, count_ulp, f_powf, f_powf_checked,
};
