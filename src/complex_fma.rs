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
use num_complex::Complex;
use num_traits::MulAdd;
use std::ops::{Add, Mul, Neg, Sub};

/// `a * b`
#[inline(always)]
pub(crate) fn c_mul_fast<
    T: Copy
        + Mul<T, Output = T>
        + Add<T, Output = T>
        + Sub<T, Output = T>
        + Neg<Output = T>
        + MulAdd<T, Output = T>,
>(
    a: Complex<T>,
    b: Complex<T>,
) -> Complex<T> {
    Complex {
        re: a.re.mul_add(b.re, -(a.im * b.im)),
        im: a.re.mul_add(b.im, a.im * b.re),
    }
}

/// `a * b + acc`
#[inline(always)]
pub(crate) fn c_mul_add_fast<
    T: Copy
        + Mul<T, Output = T>
        + Add<T, Output = T>
        + Sub<T, Output = T>
        + Neg<Output = T>
        + MulAdd<T, Output = T>,
>(
    a: Complex<T>,
    b: Complex<T>,
    acc: Complex<T>,
) -> Complex<T> {
    Complex {
        re: a.re.mul_add(b.re, (-a.im).mul_add(b.im, acc.re)),
        im: a.re.mul_add(b.im, a.im.mul_add(b.re, acc.im)),
    }
}

/// `conj(a) * b`
#[inline(always)]
pub(crate) fn c_conj_mul_fast<
    T: Copy
        + Mul<T, Output = T>
        + Add<T, Output = T>
        + Sub<T, Output = T>
        + Neg<Output = T>
        + MulAdd<T, Output = T>,
>(
    a: Complex<T>,
    b: Complex<T>,
) -> Complex<T> {
    Complex {
        re: a.re.mul_add(b.re, a.im * b.im),
        im: a.re.mul_add(b.im, -(a.im * b.re)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_complex_products() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let a = Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5);
            let b = Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5);
            let acc = Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5);

            let plain = a * b;
            let fused = c_mul_fast(a, b);
            assert!((plain.re - fused.re).abs() < 1e-14);
            assert!((plain.im - fused.im).abs() < 1e-14);

            let folded = c_mul_add_fast(a, b, acc);
            assert!((folded.re - (plain.re + acc.re)).abs() < 1e-14);
            assert!((folded.im - (plain.im + acc.im)).abs() < 1e-14);

            let conjugated = c_conj_mul_fast(a, b);
            let expected = a.conj() * b;
            assert!((conjugated.re - expected.re).abs() < 1e-14);
            assert!((conjugated.im - expected.im).abs() < 1e-14);
        }
    }
}
