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
use crate::FftDirection;
use crate::err::FftError;
use crate::traits::FftTrigonometry;
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

/// Unit-circle rotation factor `exp(-2πi·index/fft_len)` for the forward
/// direction, conjugated for the inverse one.
pub(crate) fn compute_twiddle<T: Float + FftTrigonometry + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = (-2. * index as f64 / fft_len as f64).as_();
    let (v_sin, v_cos) = angle.sincos_pi();

    let result = Complex {
        re: v_cos,
        im: v_sin,
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

const fn build_reverse_byte_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut v = i as u8;
        let mut r = 0u8;
        let mut bit = 0;
        while bit < 8 {
            r = (r << 1) | (v & 1);
            v >>= 1;
            bit += 1;
        }
        table[i] = r;
        i += 1;
    }
    table
}

/// Byte-wise lookup used to reverse a whole word eight bits at a time.
const REVERSE_BYTE: [u8; 256] = build_reverse_byte_table();

#[inline]
fn reverse_word(v: u64) -> u64 {
    let mut reversed = 0u64;
    let mut byte = 0;
    while byte < 8 {
        reversed = (reversed << 8) | REVERSE_BYTE[((v >> (byte * 8)) & 0xff) as usize] as u64;
        byte += 1;
    }
    reversed
}

/// Bit-reversal permutation for a power-of-two length: entry `i` holds the
/// index formed by reversing the low `log2(n)` bits of `i`.
pub(crate) fn bit_reverse_indices(n: usize) -> Result<Vec<usize>, FftError> {
    if n == 0 || !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }

    let mut indices = Vec::new();
    indices
        .try_reserve_exact(n)
        .map_err(|_| FftError::OutOfMemory(n))?;

    let bits = n.trailing_zeros();
    if bits == 0 {
        indices.push(0);
        return Ok(indices);
    }

    for i in 0..n {
        indices.push((reverse_word(i as u64) >> (u64::BITS - bits)) as usize);
    }
    Ok(indices)
}

/// The bit-reversal permutation is an involution, so every pair is swapped
/// exactly once by only acting when `i < lut[i]`.
pub(crate) fn permute_inplace<T: Copy>(data: &mut [T], lut: &[usize]) {
    for (i, &j) in lut.iter().enumerate() {
        if i < j {
            data.swap(i, j);
        }
    }
}

/// Packs parallel real/imaginary slices into one complex buffer.
pub(crate) fn zip_complex<T: Copy>(
    real: &[T],
    imag: &[T],
) -> Result<Vec<Complex<T>>, FftError> {
    if real.len() != imag.len() {
        return Err(FftError::LengthMismatch(real.len(), imag.len()));
    }
    let mut signal = Vec::new();
    signal
        .try_reserve_exact(real.len())
        .map_err(|_| FftError::OutOfMemory(real.len()))?;
    for (&re, &im) in real.iter().zip(imag.iter()) {
        signal.push(Complex { re, im });
    }
    Ok(signal)
}

pub(crate) fn unzip_complex_into<T: Copy>(src: &[Complex<T>], real: &mut [T], imag: &mut [T]) {
    for ((value, re), im) in src.iter().zip(real.iter_mut()).zip(imag.iter_mut()) {
        *re = value.re;
        *im = value.im;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_reverse_known_orders() {
        assert_eq!(bit_reverse_indices(1).unwrap(), vec![0]);
        assert_eq!(bit_reverse_indices(2).unwrap(), vec![0, 1]);
        assert_eq!(bit_reverse_indices(4).unwrap(), vec![0, 2, 1, 3]);
        assert_eq!(
            bit_reverse_indices(8).unwrap(),
            vec![0, 4, 2, 6, 1, 5, 3, 7]
        );
    }

    #[test]
    fn test_bit_reverse_is_involution() {
        for bits in 0..12 {
            let n = 1usize << bits;
            let lut = bit_reverse_indices(n).unwrap();
            let mut data: Vec<usize> = (0..n).collect();
            permute_inplace(&mut data, &lut);
            permute_inplace(&mut data, &lut);
            assert_eq!(data, (0..n).collect::<Vec<usize>>(), "length {n}");
        }
    }

    #[test]
    fn test_bit_reverse_rejects_bad_lengths() {
        assert!(matches!(
            bit_reverse_indices(0),
            Err(FftError::InvalidLength(0))
        ));
        assert!(matches!(
            bit_reverse_indices(12),
            Err(FftError::InvalidLength(12))
        ));
    }

    #[test]
    fn test_compute_twiddle_cardinal_points() {
        let w0: Complex<f64> = compute_twiddle(0, 8, FftDirection::Forward);
        assert_eq!(w0.re, 1.0);
        assert_eq!(w0.im, 0.0);

        let w_quarter: Complex<f64> = compute_twiddle(2, 8, FftDirection::Forward);
        assert!(w_quarter.re.abs() < 1e-15);
        assert!((w_quarter.im + 1.0).abs() < 1e-15);

        let w_half: Complex<f64> = compute_twiddle(4, 8, FftDirection::Forward);
        assert!((w_half.re + 1.0).abs() < 1e-15);
        assert!(w_half.im.abs() < 1e-15);

        let w_inv: Complex<f64> = compute_twiddle(2, 8, FftDirection::Inverse);
        assert!((w_inv.im - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_zip_checks_lengths() {
        assert!(matches!(
            zip_complex(&[1.0f64, 2.0], &[0.0]),
            Err(FftError::LengthMismatch(2, 1))
        ));
        let packed = zip_complex(&[1.0f64, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(packed[1], Complex::new(2.0, 4.0));
    }
}
