/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
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
use num_traits::{Float, MulAdd};

/// Trigonometry with the argument measured in half-turns.
///
/// `sincos_pi(x)` evaluates `(sin(πx), cos(πx))`. Keeping angles in units
/// of π lets callers reduce the argument with exact integer arithmetic
/// before any multiplication by π happens, which is what keeps long
/// twiddle tables accurate.
pub trait FftTrigonometry: Sized {
    fn sincos_pi(self) -> (Self, Self);
}

impl FftTrigonometry for f64 {
    fn sincos_pi(self) -> (f64, f64) {
        if !self.is_finite() {
            return (f64::NAN, f64::NAN);
        }
        // Reduce to r in [-1/2, 1/2] half-turns. Both steps are exact in
        // IEEE arithmetic, so the only rounding left is the final πr.
        let x = self % 2.0;
        let n = x.round();
        let r = x - n;
        let (s, c) = (r * std::f64::consts::PI).sin_cos();
        if (n as i64) % 2 == 0 { (s, c) } else { (-s, -c) }
    }
}

impl FftTrigonometry for f32 {
    fn sincos_pi(self) -> (f32, f32) {
        let (s, c) = (self as f64).sincos_pi();
        (s as f32, c as f32)
    }
}

/// Scalar sample types the transform engines are generic over.
pub trait FftSample:
    Copy + Default + Float + FftTrigonometry + MulAdd<Self, Output = Self> + Send + Sync + 'static
{
}

impl FftSample for f32 {}
impl FftSample for f64 {}
