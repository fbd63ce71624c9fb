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
use crate::complex_fma::{c_conj_mul_fast, c_mul_fast};
use crate::traits::FftSample;
use num_complex::Complex;

/// `dst = a * b`, element-wise.
pub(crate) fn mul<T: FftSample>(a: &[Complex<T>], b: &[Complex<T>], dst: &mut [Complex<T>]) {
    for ((dst, &src), &twiddle) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_fast(src, twiddle);
    }
}

/// `dst = conj(dst * b)`, element-wise.
pub(crate) fn mul_conjugate_in_place<T: FftSample>(dst: &mut [Complex<T>], b: &[Complex<T>]) {
    for (scratch_cell, &twiddle) in dst.iter_mut().zip(b.iter()) {
        *scratch_cell = c_mul_fast(*scratch_cell, twiddle).conj();
    }
}

/// `dst = conj(a) * b`, element-wise.
pub(crate) fn conjugate_mul_by_b<T: FftSample>(
    a: &[Complex<T>],
    b: &[Complex<T>],
    dst: &mut [Complex<T>],
) {
    for ((buffer_entry, inner_entry), twiddle) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *buffer_entry = c_conj_mul_fast(*inner_entry, *twiddle);
    }
}
