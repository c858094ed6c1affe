use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use tracing::debug;

use crate::{
    CommitmentSet, FieldContext, Result, Share, ShareBundle, VssError, VssParameters,
    codec::{decode_secret, encode_secret},
    dealer::distribute,
    hazmat::scrub_all,
    reconstructor::reconstruct,
};

/// The result of splitting a byte secret: one `ShareBundle` per encoded
/// element, in element order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSecret {
    secret_length: usize,
    bundles: Vec<ShareBundle>,
}

impl SplitSecret {
    pub fn secret_length(&self) -> usize {
        self.secret_length
    }

    pub fn bundles(&self) -> &[ShareBundle] {
        &self.bundles
    }

    /// The commitments for every element, in element order.
    pub fn commitments(&self) -> Vec<CommitmentSet> {
        self.bundles
            .iter()
            .map(|bundle| bundle.commitments().clone())
            .collect()
    }

    /// Everything holder `x` receives: its share of each element.
    pub fn holder_shares(&self, x: u32) -> Option<Vec<Share>> {
        self.bundles
            .iter()
            .map(|bundle| bundle.share(x).cloned())
            .collect()
    }
}

/// Split `secret` into field elements and deal each one independently.
///
/// Every element gets its own polynomial and commitments, so holders verify
/// their share of each element separately.
pub fn split_secret(
    secret: &[u8],
    params: &VssParameters,
    ctx: &FieldContext,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<SplitSecret> {
    params.check_field(ctx)?;
    let mut elements = encode_secret(secret, ctx)?;

    let bundles = elements
        .iter()
        .map(|element| distribute(element, params, ctx, &mut *random_generator))
        .collect::<Result<Vec<_>>>();

    // clean up
    scrub_all(&mut elements);

    let bundles = bundles?;
    debug!(
        secret_length = secret.len(),
        elements = bundles.len(),
        "split secret"
    );
    Ok(SplitSecret {
        secret_length: secret.len(),
        bundles,
    })
}

/// Recover a byte secret of `secret_length` bytes.
///
/// `element_shares[i]` holds whatever shares of element `i` are available and
/// `commitments[i]` that element's published commitments.
pub fn recover_secret(
    secret_length: usize,
    element_shares: &[Vec<Share>],
    commitments: &[CommitmentSet],
    params: &VssParameters,
    ctx: &FieldContext,
) -> Result<Vec<u8>> {
    if element_shares.len() != commitments.len() {
        return Err(VssError::ElementCountMismatch {
            expected: commitments.len(),
            found: element_shares.len(),
        });
    }

    let mut elements: Vec<BigUint> = Vec::with_capacity(element_shares.len());
    for (shares, element_commitments) in element_shares.iter().zip(commitments) {
        match reconstruct(shares, element_commitments, params, ctx) {
            Ok(element) => elements.push(element),
            Err(err) => {
                scrub_all(&mut elements);
                return Err(err);
            }
        }
    }

    let secret = decode_secret(&elements, secret_length, ctx);

    // clean up
    scrub_all(&mut elements);

    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_rand::make_fake_random_number_generator;
    use hex_literal::hex;

    fn context() -> FieldContext {
        FieldContext::from_subgroup_order(&BigUint::from(crate::DEFAULT_SUBGROUP_ORDER)).unwrap()
    }

    fn holders(split: &SplitSecret, xs: &[u32]) -> Vec<Vec<Share>> {
        (0..split.bundles().len())
            .map(|element| {
                xs.iter()
                    .map(|&x| split.bundles()[element].share(x).unwrap().clone())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_split_and_recover() {
        let ctx = context();
        let params = VssParameters::new(3, 5).unwrap();
        let secret = hex!("0ff784df000c4380a5ed683f7e6e3dcf");
        let mut rng = make_fake_random_number_generator();

        let split = split_secret(&secret, &params, &ctx, &mut rng).unwrap();
        assert_eq!(split.secret_length(), 16);
        assert_eq!(split.bundles().len(), 3);
        assert_eq!(split.holder_shares(2).unwrap().len(), 3);
        assert!(split.holder_shares(6).is_none());

        let recovered = recover_secret(
            split.secret_length(),
            &holders(&split, &[1, 4, 5]),
            &split.commitments(),
            &params,
            &ctx,
        )
        .unwrap();
        assert_eq!(recovered, secret.to_vec());
    }

    #[test]
    fn test_recover_needs_every_element() {
        let ctx = context();
        let params = VssParameters::new(2, 3).unwrap();
        let mut rng = make_fake_random_number_generator();
        let split = split_secret(b"attack at dawn", &params, &ctx, &mut rng).unwrap();

        let mut shares = holders(&split, &[1, 3]);
        shares[1].pop();
        assert_eq!(
            recover_secret(split.secret_length(), &shares, &split.commitments(), &params, &ctx),
            Err(VssError::InsufficientShares { required: 2, verified: 1 })
        );

        let shares = holders(&split, &[1, 3]);
        assert_eq!(
            recover_secret(split.secret_length(), &shares[1..], &split.commitments(), &params, &ctx),
            Err(VssError::ElementCountMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_split_rejects_small_subgroup() {
        let ctx = FieldContext::from_subgroup_order(&BigUint::from(127u32)).unwrap();
        let params = VssParameters::new(2, 3).unwrap();
        let mut rng = make_fake_random_number_generator();
        assert_eq!(
            split_secret(b"x", &params, &ctx, &mut rng),
            Err(VssError::SubgroupTooSmallForCodec)
        );
    }
}
