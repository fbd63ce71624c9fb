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
use crate::radix2::Radix2;
use crate::spectrum_arithmetic;
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::ops::Rem;

/// Arbitrary-length transform through the chirp-z identity.
///
/// The transform of length `n` is rewritten as a linear convolution with
/// the chirp sequence `exp(∓iπk²/n)` and carried out on buffers padded to
/// the next power of two ≥ `2n − 1`, where the radix-2 engine applies. The
/// inner inverse transform is realized by conjugation around the forward
/// engine, so a single forward radix-2 plan serves the whole convolution.
pub(crate) struct BluesteinFft<T> {
    convolve_fft: Radix2<T>,
    kernel_spectrum: Vec<Complex<T>>,
    chirp: Vec<Complex<T>>,
    execution_length: usize,
    direction: FftDirection,
}

/// Fills `destination[k]` with `exp(∓iπk²/len)` for the given direction.
fn make_chirp_twiddles<T: FftSample>(
    destination: &mut [Complex<T>],
    len: usize,
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let twice_len = len * 2;

    // The squared index is reduced modulo 2·len while still an integer,
    // which keeps the angle small before it is converted to floating
    // point. u64 products cover every length whose square fits; longer
    // transforms fall back to u128 arithmetic.
    if len < u32::MAX as usize {
        let twice_len_reduced = twice_len as u64;

        for (i, e) in destination.iter_mut().enumerate() {
            let i_squared = i as u64 * i as u64;
            let i_mod = i_squared % twice_len_reduced;
            *e = compute_twiddle(i_mod as usize, twice_len, direction);
        }
    } else {
        let twice_len_reduced = twice_len as u128;

        for (i, e) in destination.iter_mut().enumerate() {
            let i_squared = i as u128 * i as u128;
            let i_mod = i_squared.rem(twice_len_reduced);
            *e = compute_twiddle(i_mod as usize, twice_len, direction);
        }
    }
}

impl<T: FftSample> BluesteinFft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Result<BluesteinFft<T>, FftError> {
        if size == 0 {
            return Err(FftError::InvalidLength(0));
        }

        // Smallest power of two able to hold the wrapped linear convolution.
        let convolve_len = (2 * size - 1).next_power_of_two();
        let convolve_fft = Radix2::new(convolve_len, FftDirection::Forward)?;

        // The 1/M normalization of the inner inverse transform is folded
        // into the kernel spectrum once at plan time.
        let inner_scale: T = (1f64 / convolve_len as f64).as_();

        let mut kernel_spectrum = try_vec![Complex::<T>::zero(); convolve_len];
        make_chirp_twiddles(&mut kernel_spectrum[..size], size, fft_direction.inverse());

        // The kernel depends on the squared index only, so it extends
        // symmetrically into the tail of the padded buffer.
        kernel_spectrum[0] = kernel_spectrum[0] * inner_scale;
        for i in 1..size {
            let twiddle = kernel_spectrum[i] * inner_scale;
            kernel_spectrum[i] = twiddle;
            kernel_spectrum[convolve_len - i] = twiddle;
        }
        convolve_fft.execute(&mut kernel_spectrum)?;

        let mut chirp = try_vec![Complex::<T>::zero(); size];
        make_chirp_twiddles(&mut chirp, size, fft_direction);

        Ok(BluesteinFft {
            convolve_fft,
            kernel_spectrum,
            chirp,
            execution_length: size,
            direction: fft_direction,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for BluesteinFft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FftError> {
        if in_place.len() != self.execution_length {
            return Err(FftError::LengthMismatch(
                self.execution_length,
                in_place.len(),
            ));
        }

        let mut scratch = try_vec![Complex::<T>::zero(); self.kernel_spectrum.len()];

        // Chirp the input into the zero-padded convolution buffer.
        spectrum_arithmetic::mul(
            in_place,
            &self.chirp,
            &mut scratch[..self.execution_length],
        );

        self.convolve_fft.execute(&mut scratch)?;

        // Multiply by the precomputed kernel spectrum and conjugate, so the
        // next forward pass acts as the (already scaled) inverse transform.
        spectrum_arithmetic::mul_conjugate_in_place(&mut scratch, &self.kernel_spectrum);

        self.convolve_fft.execute(&mut scratch)?;

        // Undo the running conjugation and apply the output chirp.
        spectrum_arithmetic::conjugate_mul_by_b(
            &scratch[..self.execution_length],
            &self.chirp,
            in_place,
        );

        if self.direction == FftDirection::Inverse {
            let scale: T = (1f64 / self.execution_length as f64).as_();
            for value in in_place.iter_mut() {
                *value = *value * scale;
            }
        }
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::Dft;
    use rand::Rng;

    fn random_signal(size: usize) -> Vec<Complex<f64>> {
        let mut rng = rand::rng();
        (0..size)
            .map(|_| {
                Complex::new(
                    rng.random::<f64>() * 2.0 - 1.0,
                    rng.random::<f64>() * 2.0 - 1.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_bluestein_agrees_with_direct_summation() {
        for size in [2usize, 3, 5, 6, 7, 11, 13, 30, 100, 101, 127] {
            let src = random_signal(size);

            let mut actual = src.to_vec();
            BluesteinFft::new(size, FftDirection::Forward)
                .unwrap()
                .execute(&mut actual)
                .unwrap();

            let mut expected = src.to_vec();
            Dft::new(size, FftDirection::Forward)
                .unwrap()
                .execute(&mut expected)
                .unwrap();

            let tolerance = 1e-9 * size as f64;
            actual.iter().zip(expected.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < tolerance && (a.im - b.im).abs() < tolerance,
                    "{a} != {b} for size {size}"
                );
            });
        }
    }

    #[test]
    fn test_bluestein_round_trip() {
        for size in 1..=64usize {
            let src = random_signal(size);
            let mut signal = src.to_vec();

            BluesteinFft::new(size, FftDirection::Forward)
                .unwrap()
                .execute(&mut signal)
                .unwrap();
            BluesteinFft::new(size, FftDirection::Inverse)
                .unwrap()
                .execute(&mut signal)
                .unwrap();

            let tolerance = 1e-9 * size as f64;
            signal.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < tolerance && (a.im - b.im).abs() < tolerance,
                    "{a} != {b} for size {size}"
                );
            });
        }
    }

    #[test]
    fn test_bluestein_matches_radix2_on_powers_of_two() {
        for size in [2usize, 8, 64, 256] {
            let src = random_signal(size);

            let mut via_bluestein = src.to_vec();
            BluesteinFft::new(size, FftDirection::Forward)
                .unwrap()
                .execute(&mut via_bluestein)
                .unwrap();

            let mut via_radix2 = src.to_vec();
            Radix2::new(size, FftDirection::Forward)
                .unwrap()
                .execute(&mut via_radix2)
                .unwrap();

            let tolerance = 1e-9 * size as f64;
            via_bluestein.iter().zip(via_radix2.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < tolerance && (a.im - b.im).abs() < tolerance,
                    "{a} != {b} for size {size}"
                );
            });
        }
    }

    #[test]
    fn test_bluestein_length_one_is_identity() {
        let mut signal = vec![Complex::new(5.0f64, 0.0)];
        BluesteinFft::new(1, FftDirection::Forward)
            .unwrap()
            .execute(&mut signal)
            .unwrap();
        assert!((signal[0].re - 5.0).abs() < 1e-12);
        assert!(signal[0].im.abs() < 1e-12);
    }

    #[test]
    fn test_bluestein_rejects_bad_inputs() {
        assert!(matches!(
            BluesteinFft::<f64>::new(0, FftDirection::Forward),
            Err(FftError::InvalidLength(0))
        ));

        let engine = BluesteinFft::<f64>::new(5, FftDirection::Forward).unwrap();
        let mut short = vec![Complex::default(); 3];
        assert!(matches!(
            engine.execute(&mut short),
            Err(FftError::LengthMismatch(5, 3))
        ));
    }
}
