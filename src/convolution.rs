/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
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
use crate::err::{FftError, try_vec};
use crate::spectrum_arithmetic;
use crate::traits::FftSample;
use crate::{BlueFft, FftExecutor};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Circular convolution modulo `n` of two equal-length complex sequences.
///
/// Both inputs are forward-transformed, multiplied pointwise and
/// inverse-transformed; the 1/n scaling of the inverse pass is exactly
/// the convolution normalization. Callers wanting a linear convolution
/// of length `2n − 1` zero-pad the inputs to that length first. Inputs
/// are left unmodified and the result is freshly allocated.
pub(crate) fn convolve<T: FftSample>(
    x: &[Complex<T>],
    y: &[Complex<T>],
) -> Result<Vec<Complex<T>>, FftError>
where
    f64: AsPrimitive<T>,
{
    if x.len() != y.len() {
        return Err(FftError::LengthMismatch(x.len(), y.len()));
    }
    let n = x.len();

    let forward = BlueFft::make_forward_fft::<T>(n)?;
    let inverse = BlueFft::make_inverse_fft::<T>(n)?;

    let mut x_spectrum = try_vec![Complex::<T>::zero(); n];
    x_spectrum.copy_from_slice(x);
    forward.execute(&mut x_spectrum)?;

    let mut y_spectrum = try_vec![Complex::<T>::zero(); n];
    y_spectrum.copy_from_slice(y);
    forward.execute(&mut y_spectrum)?;

    let mut product = try_vec![Complex::<T>::zero(); n];
    spectrum_arithmetic::mul(&x_spectrum, &y_spectrum, &mut product);
    inverse.execute(&mut product)?;
    Ok(product)
}
