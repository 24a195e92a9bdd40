//! Backend implementations for integers

use crate::traits::{BitTest, NaturalLog};

#[cfg(feature = "num-bigint")]
use num_bigint::BigUint;
#[cfg(feature = "num-bigint")]
use num_traits::ToPrimitive;

macro_rules! impl_bittest_prim {
    ($($T:ty)*) => {$(
        impl BitTest for $T {
            #[inline]
            fn bits(&self) -> usize {
                (<$T>::BITS - self.leading_zeros()) as usize
            }
            #[inline]
            fn trailing_zeros(&self) -> usize {
                if *self == 0 {
                    0
                } else {
                    <$T>::trailing_zeros(*self) as usize
                }
            }
        }

        impl NaturalLog for $T {
            #[inline]
            fn ln(&self) -> f64 {
                (*self as f64).ln()
            }
        }
    )*}
}
impl_bittest_prim!(u8 u16 u32 u64 u128 usize);

#[cfg(feature = "num-bigint")]
impl BitTest for BigUint {
    fn bits(&self) -> usize {
        BigUint::bits(self) as usize
    }
    #[inline]
    fn trailing_zeros(&self) -> usize {
        match BigUint::trailing_zeros(self) {
            Some(a) => a as usize,
            None => 0,
        }
    }
}

#[cfg(feature = "num-bigint")]
impl NaturalLog for BigUint {
    // only the leading 64 bits are significant for a f64 result
    fn ln(&self) -> f64 {
        let shift = BigUint::bits(self).saturating_sub(64);
        let top = (self >> shift).to_u64().unwrap_or(u64::MAX);
        (top as f64).ln() + shift as f64 * std::f64::consts::LN_2
    }
}
