//! Classification of candidates against a fixed Miller-Rabin base

use crate::primality::{is_strong_probable_prime_decomposed, Decomposition, GrhMiller};
use crate::traits::{PrimalityOracle, SpspBase, SpspRefBase, StrongPrimality};

/// Outcome of testing a candidate against one base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Prime,
    /// Composite, but a strong probable prime to the base
    StrongPseudoprime,
    /// Fails the strong probable prime test for the base
    Composite,
}

/// Test if `n` is a strong pseudoprime to `base`, deciding primality with
/// `oracle`. The oracle is only consulted when `n` passes the round for `base`.
pub fn is_strong_pseudoprime_with<T: SpspBase, O: PrimalityOracle<T>>(
    n: &T,
    base: &T,
    oracle: &O,
) -> bool
where
    for<'r> &'r T: SpspRefBase<T>,
{
    let two = T::one() + T::one();
    if n <= &two {
        return false;
    }

    let decomposition = Decomposition::of(n);
    is_strong_probable_prime_decomposed(n, base, &decomposition)
        && !oracle.is_prime(n, &decomposition, Some(base))
}

/// Test if `n` is a strong pseudoprime to `base`: a strong probable prime to
/// `base` that the Miller test proves composite (under GRH).
pub fn is_strong_pseudoprime<T: SpspBase>(n: &T, base: &T) -> bool
where
    for<'r> &'r T: SpspRefBase<T>,
{
    is_strong_pseudoprime_with(n, base, &GrhMiller)
}

/// Classify `n` against `base`, deciding primality with `oracle`.
///
/// When `base` is a multiple of `n` the round carries no information, so the
/// oracle decides between [Verdict::Prime] and [Verdict::Composite]. Zero and
/// one are reported as [Verdict::Composite].
pub fn classify_with<T: SpspBase, O: PrimalityOracle<T>>(n: &T, base: &T, oracle: &O) -> Verdict
where
    for<'r> &'r T: SpspRefBase<T>,
{
    let two = T::one() + T::one();
    if n <= &two {
        return if n == &two {
            Verdict::Prime
        } else {
            Verdict::Composite
        };
    }

    let decomposition = Decomposition::of(n);
    if !is_strong_probable_prime_decomposed(n, base, &decomposition) {
        if (base % n).is_zero() && oracle.is_prime(n, &decomposition, None) {
            return Verdict::Prime;
        }
        return Verdict::Composite;
    }

    if oracle.is_prime(n, &decomposition, Some(base)) {
        Verdict::Prime
    } else {
        Verdict::StrongPseudoprime
    }
}

/// Classify `n` against `base` with the Miller test
pub fn classify<T: SpspBase>(n: &T, base: &T) -> Verdict
where
    for<'r> &'r T: SpspRefBase<T>,
{
    classify_with(n, base, &GrhMiller)
}

impl<T: SpspBase> StrongPrimality for T
where
    for<'r> &'r T: SpspRefBase<T>,
{
    fn is_sprp(&self, base: Self) -> bool {
        crate::primality::is_strong_probable_prime(self, &base)
    }

    fn is_prime_grh(&self) -> bool {
        crate::primality::is_prime(self, None)
    }

    fn is_spsp(&self, base: Self) -> bool {
        is_strong_pseudoprime(self, &base)
    }
}
