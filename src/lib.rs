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
mod bluestein;
mod cache;
mod complex_fma;
mod convolution;
mod dft;
mod err;
mod radix2;
mod spectrum;
mod spectrum_arithmetic;
mod traits;
mod util;

pub use err::FftError;
pub use spectrum::{fft_freq, fft_mag};
pub use traits::{FftSample, FftTrigonometry};

use crate::bluestein::BluesteinFft;
use crate::radix2::Radix2;
use crate::util::{unzip_complex_into, zip_complex};
use num_complex::Complex;
use num_traits::AsPrimitive;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

pub trait FftExecutor<T> {
    /// Transforms the buffer in place, overwriting it with its spectrum
    /// (or, for inverse plans, with the 1/n-scaled inverse spectrum). The
    /// buffer must not be shared with another operation for the duration
    /// of the call.
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FftError>;
    fn direction(&self) -> FftDirection;
    fn length(&self) -> usize;
}

pub struct BlueFft {}

impl BlueFft {
    fn strategy<T: FftSample>(
        n: usize,
        fft_direction: FftDirection,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, FftError>
    where
        f64: AsPrimitive<T>,
    {
        if n == 0 {
            return Err(FftError::InvalidLength(0));
        }
        if n.is_power_of_two() {
            // The in-place butterfly network applies directly
            Radix2::new(n, fft_direction)
                .map(|x| Box::new(x) as Box<dyn FftExecutor<T> + Send + Sync>)
        } else {
            // Everything else goes through the chirp-z convolution
            BluesteinFft::new(n, fft_direction)
                .map(|x| Box::new(x) as Box<dyn FftExecutor<T> + Send + Sync>)
        }
    }

    pub fn make_forward_fft<T: FftSample>(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, FftError>
    where
        f64: AsPrimitive<T>,
    {
        BlueFft::strategy(n, FftDirection::Forward)
    }

    pub fn make_inverse_fft<T: FftSample>(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, FftError>
    where
        f64: AsPrimitive<T>,
    {
        BlueFft::strategy(n, FftDirection::Inverse)
    }
}

fn dispatch_in_place<T: FftSample>(
    real: &mut [T],
    imag: &mut [T],
    fft_direction: FftDirection,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    // Pack before planning so nothing is written back unless the whole
    // operation succeeds.
    let mut signal = zip_complex(real, imag)?;
    let executor = BlueFft::strategy::<T>(signal.len(), fft_direction)?;
    executor.execute(&mut signal)?;
    unzip_complex_into(&signal, real, imag);
    Ok(())
}

/// Forward DFT of parallel real/imaginary buffers of any length n ≥ 1,
/// overwriting both buffers with the spectrum.
pub fn transform_in_place<T: FftSample>(real: &mut [T], imag: &mut [T]) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    dispatch_in_place(real, imag, FftDirection::Forward)
}

/// Inverse DFT of parallel real/imaginary buffers, overwriting both with
/// the 1/n-scaled time-domain signal.
pub fn inverse_transform_in_place<T: FftSample>(
    real: &mut [T],
    imag: &mut [T],
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    dispatch_in_place(real, imag, FftDirection::Inverse)
}

/// Copying variant of [`transform_in_place`]; the inputs stay untouched.
pub fn transform<T: FftSample>(real: &[T], imag: &[T]) -> Result<(Vec<T>, Vec<T>), FftError>
where
    f64: AsPrimitive<T>,
{
    let mut real_out = err::try_vec![T::default(); real.len()];
    real_out.copy_from_slice(real);
    let mut imag_out = err::try_vec![T::default(); imag.len()];
    imag_out.copy_from_slice(imag);
    transform_in_place(&mut real_out, &mut imag_out)?;
    Ok((real_out, imag_out))
}

/// Copying variant of [`inverse_transform_in_place`].
pub fn inverse_transform<T: FftSample>(real: &[T], imag: &[T]) -> Result<(Vec<T>, Vec<T>), FftError>
where
    f64: AsPrimitive<T>,
{
    let mut real_out = err::try_vec![T::default(); real.len()];
    real_out.copy_from_slice(real);
    let mut imag_out = err::try_vec![T::default(); imag.len()];
    imag_out.copy_from_slice(imag);
    inverse_transform_in_place(&mut real_out, &mut imag_out)?;
    Ok((real_out, imag_out))
}

/// Forward DFT of a real-valued signal; the all-zero imaginary buffer is
/// supplied here so the transform entry point stays uniformly complex.
pub fn transform_real<T: FftSample>(signal: &[T]) -> Result<(Vec<T>, Vec<T>), FftError>
where
    f64: AsPrimitive<T>,
{
    let imag = err::try_vec![T::default(); signal.len()];
    transform(signal, &imag)
}

/// Circular convolution modulo n of two equal-length complex sequences
/// given as parallel real/imaginary buffers. Inputs stay untouched; the
/// result is freshly allocated. Zero-pad to 2n − 1 first when a linear
/// convolution is wanted.
pub fn convolve_complex<T: FftSample>(
    x_real: &[T],
    x_imag: &[T],
    y_real: &[T],
    y_imag: &[T],
) -> Result<(Vec<T>, Vec<T>), FftError>
where
    f64: AsPrimitive<T>,
{
    let x = zip_complex(x_real, x_imag)?;
    let y = zip_complex(y_real, y_imag)?;
    let product = convolution::convolve(&x, &y)?;

    let mut real_out = err::try_vec![T::default(); product.len()];
    let mut imag_out = err::try_vec![T::default(); product.len()];
    unzip_complex_into(&product, &mut real_out, &mut imag_out);
    Ok((real_out, imag_out))
}
