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
use crate::FftDirection;
use crate::err::FftError;
use crate::util::{bit_reverse_indices, compute_twiddle};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Process-wide memoization of rotation factors, keyed by the literal
/// `(transform length, index)` pair.
///
/// Entries hold the forward value `exp(-2πi·index/fft_len)` in double
/// precision; inverse requests conjugate on the way out and single
/// precision narrows on the way out. Entries are written once and never
/// evicted, so the only mutation to guard is the lazy insert itself.
pub(crate) struct TwiddleCache {
    entries: Mutex<HashMap<(usize, usize), Complex<f64>>>,
}

impl TwiddleCache {
    pub(crate) fn twiddle<T: Copy + 'static>(
        &self,
        index: usize,
        fft_len: usize,
        direction: FftDirection,
    ) -> Complex<T>
    where
        f64: AsPrimitive<T>,
    {
        debug_assert!(fft_len > 0, "twiddle factors are undefined for length 0");
        // A poisoned mutex only means another thread panicked while
        // holding it; the map still contains whole entries.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let w = *entries
            .entry((fft_len, index))
            .or_insert_with(|| compute_twiddle::<f64>(index, fft_len, FftDirection::Forward));
        drop(entries);

        let w = match direction {
            FftDirection::Forward => w,
            FftDirection::Inverse => w.conj(),
        };
        Complex {
            re: w.re.as_(),
            im: w.im.as_(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

pub(crate) fn twiddle_cache() -> &'static TwiddleCache {
    static TWIDDLES: OnceLock<TwiddleCache> = OnceLock::new();
    TWIDDLES.get_or_init(|| TwiddleCache {
        entries: Mutex::new(HashMap::new()),
    })
}

/// Process-wide memoization of bit-reversal permutations keyed by the
/// power-of-two transform length. The permutation for each length is
/// computed once and afterwards shared by reference.
pub(crate) struct BitReversalCache {
    entries: Mutex<HashMap<usize, Arc<[usize]>>>,
}

impl BitReversalCache {
    pub(crate) fn permutation(&self, n: usize) -> Result<Arc<[usize]>, FftError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = entries.get(&n) {
            return Ok(existing.clone());
        }
        let permutation: Arc<[usize]> = bit_reverse_indices(n)?.into();
        entries.insert(n, permutation.clone());
        Ok(permutation)
    }
}

pub(crate) fn bit_reversal_cache() -> &'static BitReversalCache {
    static PERMUTATIONS: OnceLock<BitReversalCache> = OnceLock::new();
    PERMUTATIONS.get_or_init(|| BitReversalCache {
        entries: Mutex::new(HashMap::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twiddle_memoizes_literal_pairs() {
        let cache = TwiddleCache {
            entries: Mutex::new(HashMap::new()),
        };
        let first: Complex<f64> = cache.twiddle(3, 16, FftDirection::Forward);
        let again: Complex<f64> = cache.twiddle(3, 16, FftDirection::Forward);
        assert_eq!(first, again);
        assert_eq!(cache.len(), 1);

        // The inverse direction reads the same entry.
        let inverse: Complex<f64> = cache.twiddle(3, 16, FftDirection::Inverse);
        assert_eq!(cache.len(), 1);
        assert_eq!(inverse, first.conj());

        // An index past the transform length is a distinct literal key.
        let _: Complex<f64> = cache.twiddle(19, 16, FftDirection::Forward);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_permutations_are_shared() {
        let cache = BitReversalCache {
            entries: Mutex::new(HashMap::new()),
        };
        let first = cache.permutation(64).unwrap();
        let second = cache.permutation(64).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.permutation(48).is_err());
    }

    #[test]
    fn test_concurrent_lazy_inserts() {
        let cache = BitReversalCache {
            entries: Mutex::new(HashMap::new()),
        };
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for bits in 0..10 {
                        let n = 1usize << bits;
                        let lut = cache.permutation(n).unwrap();
                        assert_eq!(lut.len(), n);
                    }
                });
            }
        });
    }
}
