//! Miller-Rabin rounds and the Miller test built on top of them.
//!
//! The Miller test is deterministic only under the generalized Riemann
//! hypothesis (GRH): if GRH holds, every odd composite `n` has a witness below
//! `2 ln(n)^2` (Bach's bound), so testing all bases under it proves primality.
//! Without GRH a `true` result is still a very strong probable-prime verdict,
//! but not a proof.

use crate::traits::{NaturalLog, PrimalityOracle, SpspBase, SpspRefBase};
use num_modular::{ModularPow, ModularUnaryOps};

/// The factorization `n - 1 = d * 2^s` with odd `d`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<T> {
    pub d: T,
    pub s: usize,
}

impl<T: SpspBase> Decomposition<T>
where
    for<'r> &'r T: SpspRefBase<T>,
{
    /// Decompose `n - 1`, `n` should be at least 2
    pub fn of(n: &T) -> Self {
        let tm1 = n - T::one();
        let s = tm1.trailing_zeros();
        let d = &tm1 >> s;
        Decomposition { d, s }
    }
}

/// One Miller-Rabin round for `base`. Fails as soon as a nontrivial square
/// root of 1 shows up, otherwise checks that `base^(n-1) = 1 (mod n)`.
fn strong_round<T: SpspBase>(n: &T, tm1: &T, base: &T, decomposition: &Decomposition<T>) -> bool
where
    for<'r> &'r T: SpspRefBase<T>,
{
    let one = T::one();
    let mut x = base.powm(&decomposition.d, n);
    for _ in 0..decomposition.s {
        let y = (&x).sqm(n);
        if y == one && x != one && &x != tm1 {
            return false;
        }
        x = y;
    }
    x == one
}

/// Return `floor(2 ln(n)^2)`, the bound on the least witness of an odd
/// composite `n` under GRH.
pub fn witness_bound<T: NaturalLog>(n: &T) -> u64 {
    let ln = n.ln();
    if !(ln > 0.) {
        return 0;
    }
    (2. * ln * ln).floor() as u64
}

/// Strong probable prime test with a precomputed decomposition of `n - 1`.
pub fn is_strong_probable_prime_decomposed<T: SpspBase>(
    n: &T,
    base: &T,
    decomposition: &Decomposition<T>,
) -> bool
where
    for<'r> &'r T: SpspRefBase<T>,
{
    let tm1 = n - T::one();
    strong_round(n, &tm1, base, decomposition)
}

/// Test if `n` is a strong probable prime to `base` (one round of the
/// Miller-Rabin test).
///
/// `n` is expected to be at least 3, values below that return `n == 2`.
/// Bases larger than `n` are reduced modulo `n`.
pub fn is_strong_probable_prime<T: SpspBase>(n: &T, base: &T) -> bool
where
    for<'r> &'r T: SpspRefBase<T>,
{
    let two = T::one() + T::one();
    if n <= &two {
        return n == &two;
    }
    is_strong_probable_prime_decomposed(n, base, &Decomposition::of(n))
}

/// Miller test with a precomputed decomposition of `n - 1`, see [is_prime].
pub fn is_prime_decomposed<T: SpspBase>(
    n: &T,
    decomposition: &Decomposition<T>,
    skip_base: Option<&T>,
) -> bool
where
    for<'r> &'r T: SpspRefBase<T>,
{
    let two = T::one() + T::one();
    if n <= &two {
        return n == &two;
    }
    if n.is_even() {
        return false;
    }

    let tm1 = n - T::one();
    let limit = match T::from_u64(witness_bound(n)) {
        Some(bound) if bound < tm1 => bound,
        _ => tm1.clone(),
    };

    let mut base = two;
    while base < limit {
        if skip_base != Some(&base) && !strong_round(n, &tm1, &base, decomposition) {
            return false;
        }
        base = base + T::one();
    }
    true
}

/// Test if `n` is prime with the Miller test: `n` has to be a strong probable
/// prime to every base in `[2, min(n-1, 2 ln(n)^2))`.
///
/// `skip_base` is left out of the trial bases, which is useful when `n` is
/// already known to pass the round for it. A composite still has a witness
/// among the remaining bases.
///
/// The result is only guaranteed correct if the generalized Riemann hypothesis
/// holds. For `n = 3` the base range is empty and the result is `true`.
pub fn is_prime<T: SpspBase>(n: &T, skip_base: Option<&T>) -> bool
where
    for<'r> &'r T: SpspRefBase<T>,
{
    let two = T::one() + T::one();
    if n <= &two {
        return n == &two;
    }
    is_prime_decomposed(n, &Decomposition::of(n), skip_base)
}

/// The Miller test under GRH as a [PrimalityOracle]
#[derive(Debug, Clone, Copy, Default)]
pub struct GrhMiller;

impl<T: SpspBase> PrimalityOracle<T> for GrhMiller
where
    for<'r> &'r T: SpspRefBase<T>,
{
    fn is_prime(&self, n: &T, decomposition: &Decomposition<T>, skip_base: Option<&T>) -> bool {
        is_prime_decomposed(n, decomposition, skip_base)
    }
}
