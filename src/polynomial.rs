use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::{CommitmentSet, FieldContext, hazmat::scrub};

/// A dealer's secret polynomial `a_0 + a_1 x + ... + a_(t-1) x^(t-1)` over
/// `Z/qZ`. The coefficients are overwritten when the polynomial is dropped.
pub(crate) struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Draw a random polynomial with `threshold` coefficients whose constant
    /// term is `constant`.
    pub fn generate(
        threshold: usize,
        constant: &BigUint,
        ctx: &FieldContext,
        random_generator: &mut impl RandomNumberGenerator,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(ctx.reduce(constant));
        coefficients.extend((1..threshold).map(|_| ctx.random_scalar(&mut *random_generator)));
        Self { coefficients }
    }

    #[cfg(test)]
    pub fn from_coefficients(coefficients: Vec<BigUint>) -> Self {
        Self { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Horner evaluation at `x`.
    pub fn evaluate(&self, x: &BigUint, ctx: &FieldContext) -> BigUint {
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, coefficient| {
                ctx.add(&ctx.mul(&acc, x), coefficient)
            })
    }

    /// `g^(a_i)` for every coefficient.
    pub fn commitments(&self, ctx: &FieldContext) -> CommitmentSet {
        self.coefficients
            .iter()
            .map(|coefficient| ctx.commit(coefficient))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.coefficients.iter_mut().for_each(scrub);
    }
}
