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
use crate::cache::{bit_reversal_cache, twiddle_cache};
use crate::complex_fma::c_mul_fast;
use crate::err::FftError;
use crate::traits::FftSample;
use crate::util::permute_inplace;
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::sync::Arc;

/// In-place Cooley-Tukey radix-2 engine for power-of-two lengths.
///
/// Planning resolves the bit-reversal permutation and the per-stage
/// twiddle factors once; `execute` then runs the butterfly network
/// directly on the caller's buffer, destroying its previous contents.
pub(crate) struct Radix2<T> {
    twiddles: Vec<Complex<T>>,
    permutation: Arc<[usize]>,
    execution_length: usize,
    direction: FftDirection,
}

impl<T: FftSample> Radix2<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Result<Radix2<T>, FftError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(FftError::InvalidLength(size));
        }

        let permutation = bit_reversal_cache().permutation(size)?;

        // One factor per butterfly offset per stage: 1 + 2 + ... + size/2.
        let mut twiddles = Vec::new();
        twiddles
            .try_reserve_exact(size - 1)
            .map_err(|_| FftError::OutOfMemory(size - 1))?;

        let cache = twiddle_cache();
        let mut len = 2;
        while len <= size {
            for i in 0..len / 2 {
                twiddles.push(cache.twiddle(i, len, fft_direction));
            }
            len *= 2;
        }

        Ok(Radix2 {
            twiddles,
            permutation,
            execution_length: size,
            direction: fft_direction,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Radix2<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), FftError> {
        if self.execution_length != in_place.len() {
            return Err(FftError::LengthMismatch(
                self.execution_length,
                in_place.len(),
            ));
        }

        permute_inplace(in_place, &self.permutation);

        let mut len = 2;

        unsafe {
            let mut m_twiddles = self.twiddles.as_slice();
            while len <= self.execution_length {
                let half = len / 2;
                for data in in_place.chunks_exact_mut(len) {
                    for j in 0..half {
                        let u = *data.get_unchecked(j);
                        let tw = *m_twiddles.get_unchecked(j);
                        let t = c_mul_fast(tw, *data.get_unchecked(j + half));
                        *data.get_unchecked_mut(j) = u + t;
                        *data.get_unchecked_mut(j + half) = u - t;
                    }
                }

                len *= 2;
                m_twiddles = &m_twiddles[half..];
            }
        }

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
