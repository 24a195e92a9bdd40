use crate::primality::Decomposition;
use num_integer::Integer;
use num_modular::{ModularPow, ModularUnaryOps};
use num_traits::{FromPrimitive, NumRef, RefNum, ToPrimitive};

/// Bit level queries on an unsigned integer
pub trait BitTest {
    /// Number of significant bits
    fn bits(&self) -> usize;

    /// Exponent of the factor 2 in the number. Zero is reported as 0.
    fn trailing_zeros(&self) -> usize;
}

/// Natural logarithm of an unsigned integer as a float
pub trait NaturalLog {
    /// Return ln(self), or negative infinity for zero
    fn ln(&self) -> f64;
}

/// Integer types that can be tested by the strong pseudoprime search
pub trait SpspBase:
    Integer + NumRef + Clone + FromPrimitive + ToPrimitive + BitTest + NaturalLog
{
}
impl<T: Integer + NumRef + Clone + FromPrimitive + ToPrimitive + BitTest + NaturalLog> SpspBase
    for T
{
}

/// Operations required on references of a [SpspBase] type
pub trait SpspRefBase<Base>:
    RefNum<Base>
    + std::ops::Shr<usize, Output = Base>
    + for<'r> ModularPow<&'r Base, &'r Base, Output = Base>
    + for<'r> ModularUnaryOps<&'r Base, Output = Base>
{
}
impl<T, Base> SpspRefBase<Base> for T where
    T: RefNum<Base>
        + std::ops::Shr<usize, Output = Base>
        + for<'r> ModularPow<&'r Base, &'r Base, Output = Base>
        + for<'r> ModularUnaryOps<&'r Base, Output = Base>
{
}

/// Method style access to the tests of this crate
pub trait StrongPrimality: Sized {
    /// Test if the integer is a strong probable prime to `base`
    fn is_sprp(&self, base: Self) -> bool;

    /// Test if the integer is prime with the Miller test (assuming GRH)
    fn is_prime_grh(&self) -> bool;

    /// Test if the integer is a strong pseudoprime to `base`
    fn is_spsp(&self, base: Self) -> bool;
}

/// A primality decision used by the classifier once a candidate passed the
/// strong probable prime test.
pub trait PrimalityOracle<T> {
    /// Decide whether `n` is prime. `skip_base` is a base already known not to
    /// be a witness for `n`, the oracle may leave it out.
    fn is_prime(&self, n: &T, decomposition: &Decomposition<T>, skip_base: Option<&T>) -> bool;
}

/// Receiver of the events emitted by a range scan. Calls are made
/// synchronously and in ascending order of the scanned candidates.
pub trait ScanReporter<T> {
    /// A strong pseudoprime was found
    fn on_found(&mut self, n: &T);

    /// The scan entered progress segment `segment` (1-based) out of `total`
    fn on_progress(&mut self, segment: u64, total: u64, elapsed_secs: f64);

    /// The scan completed with `count` strong pseudoprimes
    fn on_summary(&mut self, count: usize, elapsed_secs: f64);
}
