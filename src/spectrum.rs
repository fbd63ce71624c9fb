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
use crate::err::FftError;
use crate::traits::FftSample;
use num_traits::AsPrimitive;

/// Magnitudes of the first half of a spectrum, the only half carrying
/// unique information for real-valued input signals.
pub fn fft_mag<T: FftSample>(real: &[T], imag: &[T]) -> Result<Vec<T>, FftError> {
    if real.len() != imag.len() {
        return Err(FftError::LengthMismatch(real.len(), imag.len()));
    }
    let half = real.len() / 2;
    let mut magnitudes = Vec::new();
    magnitudes
        .try_reserve_exact(half)
        .map_err(|_| FftError::OutOfMemory(half))?;
    for (&re, &im) in real.iter().zip(imag.iter()).take(half) {
        magnitudes.push(re.hypot(im));
    }
    Ok(magnitudes)
}

/// Center frequency in hertz of each of the first `fft_len / 2` bins for a
/// signal sampled `sample_rate` times per second.
pub fn fft_freq<T: FftSample>(fft_len: usize, sample_rate: T) -> Result<Vec<T>, FftError>
where
    usize: AsPrimitive<T>,
{
    if fft_len == 0 {
        return Err(FftError::InvalidLength(0));
    }
    let step = sample_rate / fft_len.as_();
    let half = fft_len / 2;
    let mut frequencies = Vec::new();
    frequencies
        .try_reserve_exact(half)
        .map_err(|_| FftError::OutOfMemory(half))?;
    for ix in 0..half {
        frequencies.push(ix.as_() * step);
    }
    Ok(frequencies)
}
