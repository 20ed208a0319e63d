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
use std::error::Error;
use std::fmt::Display;

/// Kind of the floating point exception raised by a computation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MathErrorKind {
    /// Argument outside of the function domain, e.g. a negative base with a non integral exponent.
    Invalid,
    /// Exact infinite result from finite arguments, zero raised to a negative power.
    DivideByZero,
    /// Result magnitude is too large to be represented.
    Overflow,
    /// Result magnitude is too small to be represented as a normal number.
    Underflow,
}

/// Exceptional outcome of a math routine.
///
/// The IEEE-754 result is always available through [MathError::value],
/// so callers who don't care about the condition may simply use it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MathError {
    kind: MathErrorKind,
    value: f32,
}

impl MathError {
    #[inline]
    pub(crate) const fn new(kind: MathErrorKind, value: f32) -> Self {
        Self { kind, value }
    }

    #[inline]
    pub const fn kind(&self) -> MathErrorKind {
        self.kind
    }

    /// Value returned by the computation, NaN, signed zero or signed infinity.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.value
    }
}

impl Display for MathErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathErrorKind::Invalid => f.write_str("Invalid argument (domain error)"),
            MathErrorKind::DivideByZero => f.write_str("Division by zero (pole error)"),
            MathErrorKind::Overflow => f.write_str("Result overflows (range error)"),
            MathErrorKind::Underflow => f.write_str("Result underflows (range error)"),
        }
    }
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, result is {}", self.kind, self.value)
    }
}

impl Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MathError::new(MathErrorKind::Overflow, f32::NEG_INFINITY);
        assert_eq!(err.to_string(), "Result overflows (range error), result is -inf");
        let err = MathError::new(MathErrorKind::Invalid, f32::NAN);
        assert_eq!(err.kind(), MathErrorKind::Invalid);
        assert!(err.value().is_nan());
        assert_eq!(err.to_string(), "Invalid argument (domain error), result is NaN");
    }

    #[test]
    fn test_boxed_error() {
        let boxed: Box<dyn Error> = Box::new(MathError::new(MathErrorKind::Underflow, 0.));
        assert_eq!(
            boxed.to_string(),
            "Result underflows (range error), result is 0"
        );
    }
}
