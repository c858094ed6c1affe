use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::constants::MILLER_RABIN_BASES;

/// Miller-Rabin primality test over the fixed witness set
/// `MILLER_RABIN_BASES`.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    for base in MILLER_RABIN_BASES {
        let base = BigUint::from(base);
        if *n == base {
            return true;
        }
        if n.is_multiple_of(&base) {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for base in MILLER_RABIN_BASES {
        let mut x = BigUint::from(base).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
            if x.is_one() {
                return false;
            }
        }
        return false;
    }
    true
}

/// True if `n` is a multiple of `m` (and `m` is nonzero).
pub(crate) fn divides(m: &BigUint, n: &BigUint) -> bool {
    !m.is_zero() && n.is_multiple_of(m)
}
