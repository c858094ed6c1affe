use bc_rand::RandomNumberGenerator;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::debug;

use crate::{
    Result, VssError,
    constants::{GENERATOR_SEARCH_LIMIT, MODULUS_SEARCH_LIMIT},
    hazmat::random_below,
    primes::{divides, is_probable_prime},
};

/// The public parameters of a dealing: a prime modulus `p`, a prime
/// subgroup order `q` dividing `p - 1`, and a generator `g` of the order-`q`
/// subgroup of `(Z/pZ)^*`.
///
/// Secret elements, polynomial coefficients and share values are scalars in
/// `Z/qZ`; commitments are elements of the subgroup generated by `g`.
/// A context never changes after construction and may be shared freely
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContext {
    modulus: BigUint,
    order: BigUint,
    generator: BigUint,
}

impl FieldContext {
    /// Select a modulus and generator for the given prime subgroup order.
    pub fn from_subgroup_order(order: &BigUint) -> Result<Self> {
        let modulus = select_modulus(order)?;
        let generator = find_generator(&modulus, order)?;
        Ok(Self {
            modulus,
            order: order.clone(),
            generator,
        })
    }

    /// Validate an explicit `(p, q)` pair and locate a generator for it.
    pub fn new(modulus: BigUint, order: BigUint) -> Result<Self> {
        validate_group(&modulus, &order)?;
        let generator = find_generator(&modulus, &order)?;
        Ok(Self {
            modulus,
            order,
            generator,
        })
    }

    /// Validate a published `(p, q, g)` triple.
    pub fn with_generator(modulus: BigUint, order: BigUint, generator: BigUint) -> Result<Self> {
        validate_group(&modulus, &order)?;
        if generator <= BigUint::one()
            || generator >= modulus
            || !generator.modpow(&order, &modulus).is_one()
        {
            return Err(VssError::InvalidGenerator);
        }
        Ok(Self {
            modulus,
            order,
            generator,
        })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// `a + b mod q`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + self.reduce(b)) % &self.order
    }

    /// `a - b mod q`. The modulus is added before reducing so the
    /// intermediate never goes negative.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + &self.order - self.reduce(b)) % &self.order
    }

    /// `a * b mod q`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) * self.reduce(b)) % &self.order
    }

    /// `a^-1 mod q`.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        mod_inverse(&self.reduce(a), &self.order)
    }

    /// `a mod q`.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.order
    }

    /// True if `value` is a canonical scalar, i.e. lies in `[0, q - 1]`.
    pub fn contains_scalar(&self, value: &BigUint) -> bool {
        *value < self.order
    }

    /// `g^exponent mod p`.
    pub fn commit(&self, exponent: &BigUint) -> BigUint {
        self.generator.modpow(exponent, &self.modulus)
    }

    /// `a * b mod p`, for combining commitments.
    pub fn group_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// `base^exponent mod p`.
    pub fn group_pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// True if `element` lies in the order-`q` subgroup of `(Z/pZ)^*`.
    pub fn is_group_element(&self, element: &BigUint) -> bool {
        !element.is_zero()
            && *element < self.modulus
            && self.group_pow(element, &self.order).is_one()
    }

    pub(crate) fn random_scalar(&self, random_generator: &mut impl RandomNumberGenerator) -> BigUint {
        random_below(&self.order, random_generator)
    }
}

fn validate_group(modulus: &BigUint, order: &BigUint) -> Result<()> {
    if !is_probable_prime(order) {
        return Err(VssError::SubgroupOrderNotPrime);
    }
    if !is_probable_prime(modulus) {
        return Err(VssError::ModulusNotPrime);
    }
    if !divides(order, &(modulus - 1u32)) {
        return Err(VssError::SubgroupOrderMismatch);
    }
    Ok(())
}

/// Find the smallest prime `p = k * q + 1` with even `k >= 2`.
///
/// Gives up after `MODULUS_SEARCH_LIMIT` candidates.
pub fn select_modulus(order: &BigUint) -> Result<BigUint> {
    search_modulus(order, MODULUS_SEARCH_LIMIT)
}

pub(crate) fn search_modulus(order: &BigUint, limit: usize) -> Result<BigUint> {
    if !is_probable_prime(order) {
        return Err(VssError::SubgroupOrderNotPrime);
    }
    let mut multiplier = BigUint::from(2u32);
    for attempt in 1..=limit {
        let candidate = order * &multiplier + 1u32;
        if is_probable_prime(&candidate) {
            debug!(
                order_bits = order.bits(),
                modulus_bits = candidate.bits(),
                attempts = attempt,
                "selected modulus"
            );
            return Ok(candidate);
        }
        multiplier += 2u32;
    }
    Err(VssError::ModulusSearchExhausted(limit))
}

/// Deterministically locate an element of order exactly `q` in `(Z/pZ)^*`.
///
/// Returns `h^((p - 1) / q)` for the first `h >= 2` where that is not 1.
/// Since `q` is prime, any such element has order `q`.
pub fn find_generator(modulus: &BigUint, order: &BigUint) -> Result<BigUint> {
    search_generator(modulus, order, GENERATOR_SEARCH_LIMIT)
}

pub(crate) fn search_generator(modulus: &BigUint, order: &BigUint, limit: u32) -> Result<BigUint> {
    let p_minus_one = modulus - 1u32;
    if !divides(order, &p_minus_one) {
        return Err(VssError::SubgroupOrderMismatch);
    }
    let cofactor = &p_minus_one / order;
    for h in 2..limit.saturating_add(2) {
        let h = BigUint::from(h);
        if h >= *modulus {
            break;
        }
        let g = h.modpow(&cofactor, modulus);
        if !g.is_one() {
            debug!(base = %h, "found subgroup generator");
            return Ok(g);
        }
    }
    Err(VssError::GeneratorSearchExhausted(limit))
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm.
///
/// Fails with `NoInverse` iff `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(VssError::NoInverse);
    }
    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut r0 = modulus.clone();
    let mut r1 = BigInt::from_biguint(Sign::Plus, a % m);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let (quotient, remainder) = r0.div_rem(&r1);
        r0 = std::mem::replace(&mut r1, remainder);
        let next = &t0 - &quotient * &t1;
        t0 = std::mem::replace(&mut t1, next);
    }

    if !r0.is_one() {
        return Err(VssError::NoInverse);
    }
    // mod_floor leaves a value in [0, m), so the magnitude is the inverse.
    Ok(t0.mod_floor(&modulus).into_parts().1)
}
