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
use bluefft::{BlueFft, FftExecutor};
use criterion::{Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use rand::Rng;

fn random_signal(n: usize) -> Vec<Complex<f64>> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            Complex::new(
                rng.random::<f64>() * 2.0 - 1.0,
                rng.random::<f64>() * 2.0 - 1.0,
            )
        })
        .collect()
}

pub fn bench_radix2(c: &mut Criterion) {
    let input = random_signal(4096);
    let fft = BlueFft::make_forward_fft::<f64>(4096).unwrap();
    c.bench_function("radix2 4096", |b| {
        b.iter(|| {
            let mut buffer = input.to_vec();
            fft.execute(&mut buffer).unwrap();
        })
    });
}

pub fn bench_bluestein(c: &mut Criterion) {
    // One below the power of two, the worst case for the chirp-z path.
    let input = random_signal(4095);
    let fft = BlueFft::make_forward_fft::<f64>(4095).unwrap();
    c.bench_function("bluestein 4095", |b| {
        b.iter(|| {
            let mut buffer = input.to_vec();
            fft.execute(&mut buffer).unwrap();
        })
    });
}

pub fn bench_mixed_sizes(c: &mut Criterion) {
    let plans: Vec<_> = (500..=600usize)
        .map(|n| {
            (
                random_signal(n),
                BlueFft::make_forward_fft::<f64>(n).unwrap(),
            )
        })
        .collect();
    c.bench_function("mixed sizes 500..=600", |b| {
        b.iter(|| {
            for (input, fft) in plans.iter() {
                let mut buffer = input.to_vec();
                fft.execute(&mut buffer).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_radix2, bench_bluestein, bench_mixed_sizes);
criterion_main!(benches);
