use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use tracing::debug;

use crate::{
    FieldContext, Result, Share, ShareBundle, VssError, VssParameters, polynomial::Polynomial,
};

/// Split one secret element into `n` shares, any `t` of which recover it,
/// and publish a commitment to every coefficient of the sharing polynomial.
///
/// The polynomial exists only for the duration of this call and is scrubbed
/// before it returns.
pub fn distribute(
    secret: &BigUint,
    params: &VssParameters,
    ctx: &FieldContext,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<ShareBundle> {
    params.check_field(ctx)?;
    if !ctx.contains_scalar(secret) {
        return Err(VssError::SecretOutOfRange);
    }

    let polynomial = Polynomial::generate(params.threshold(), secret, ctx, random_generator);

    let shares = (1..=params.share_count() as u32)
        .map(|x| Share::new(x, polynomial.evaluate(&BigUint::from(x), ctx)))
        .collect();
    let commitments = polynomial.commitments(ctx);

    debug!(
        degree = polynomial.degree(),
        share_count = params.share_count(),
        "dealt secret element"
    );
    drop(polynomial);

    Ok(ShareBundle::new(shares, commitments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_rand::make_fake_random_number_generator;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_distribute_shape() {
        let ctx = FieldContext::from_subgroup_order(&big(127)).unwrap();
        let params = VssParameters::new(3, 5).unwrap();
        let mut rng = make_fake_random_number_generator();
        let bundle = distribute(&big(42), &params, &ctx, &mut rng).unwrap();

        let xs: Vec<u32> = bundle.shares().iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![1, 2, 3, 4, 5]);
        assert!(bundle.shares().iter().all(|s| ctx.contains_scalar(&s.y)));
        assert_eq!(bundle.commitments().len(), 3);
        assert_eq!(bundle.commitments().secret_commitment(), Some(&ctx.commit(&big(42))));
    }

    #[test]
    fn test_threshold_one_copies_secret() {
        let ctx = FieldContext::from_subgroup_order(&big(127)).unwrap();
        let params = VssParameters::new(1, 4).unwrap();
        let mut rng = make_fake_random_number_generator();
        let bundle = distribute(&big(17), &params, &ctx, &mut rng).unwrap();
        assert!(bundle.shares().iter().all(|s| s.y == big(17)));
        assert_eq!(bundle.commitments().len(), 1);
    }

    #[test]
    fn test_rejects_bad_input() {
        let ctx = FieldContext::from_subgroup_order(&big(127)).unwrap();
        let mut rng = make_fake_random_number_generator();

        let params = VssParameters::new(2, 4).unwrap();
        assert_eq!(
            distribute(&big(127), &params, &ctx, &mut rng),
            Err(VssError::SecretOutOfRange)
        );

        let params = VssParameters::new(2, 127).unwrap();
        assert_eq!(
            distribute(&big(1), &params, &ctx, &mut rng),
            Err(VssError::ShareCountExceedsField(127))
        );
    }
}
