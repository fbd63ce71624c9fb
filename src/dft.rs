/*
 * // Copyright (c) Radzivon Bartoshyk 9/2025. All rights reserved.
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
use crate::cache::twiddle_cache;
use crate::complex_fma::c_mul_add_fast;
use crate::err::{FftError, try_vec};
use crate::traits::FftSample;
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Direct O(n²) summation. Kept as the agreement oracle for the fast
/// engines; it is never selected by the planner.
pub(crate) struct Dft<T> {
    execution_length: usize,
    twiddles: Vec<Complex<T>>,
    direction: FftDirection,
}

impl<T: FftSample> Dft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Result<Dft<T>, FftError> {
        if size == 0 {
            return Err(FftError::InvalidLength(0));
        }
        let cache = twiddle_cache();
        let mut twiddles = Vec::new();
        twiddles
            .try_reserve_exact(size)
            .map_err(|_| FftError::OutOfMemory(size))?;
        for k in 0..size {
            twiddles.push(cache.twiddle(k, size, fft_direction));
        }
        Ok(Dft {
            execution_length: size,
            twiddles,
            direction: fft_direction,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Dft<T>
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

        let mut output = try_vec![Complex::<T>::default(); self.execution_length];

        for (k, dst) in output.iter_mut().enumerate() {
            let mut sum = Complex::<T>::default();
            // Stepping the twiddle index by k modulo n avoids computing
            // k*t products that would lose precision for large n.
            let mut twiddle_idx = 0usize;
            for src in in_place.iter() {
                let w = self.twiddles[twiddle_idx];
                sum = c_mul_add_fast(*src, w, sum);
                twiddle_idx += k;
                if twiddle_idx >= self.twiddles.len() {
                    twiddle_idx -= self.twiddles.len();
                }
            }
            *dst = sum;
        }

        if self.direction == FftDirection::Inverse {
            let scale: T = (1f64 / self.execution_length as f64).as_();
            for value in output.iter_mut() {
                *value = *value * scale;
            }
        }

        in_place.copy_from_slice(&output);
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}
