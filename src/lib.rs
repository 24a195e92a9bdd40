//! Search for strong pseudoprimes: composites that pass the Miller-Rabin round
//! for a fixed base.
//!
//! Primality of the candidates that pass the round is decided with the Miller
//! test, which is deterministic under the generalized Riemann hypothesis.
//! All tests are generic over the unsigned primitives and, with the `big-int`
//! feature, `num_bigint::BigUint`.

mod error;
mod integer;
pub mod primality;
pub mod pseudoprime;
pub mod search;
mod traits;

pub use error::{Error, Result};
pub use primality::{is_prime, is_strong_probable_prime, witness_bound, Decomposition, GrhMiller};
pub use pseudoprime::{classify, is_strong_pseudoprime, Verdict};
pub use search::{scan, scan_with, LogReporter, NoopReporter, ScanConfig};
pub use traits::{
    BitTest, NaturalLog, PrimalityOracle, ScanReporter, SpspBase, SpspRefBase, StrongPrimality,
};
