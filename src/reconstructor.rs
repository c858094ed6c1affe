use std::collections::BTreeMap;

use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::{
    CommitmentSet, FieldContext, Result, Share, ShareFault, VssError, VssParameters,
    hazmat::scrub_all,
    interpolate::interpolate_at_zero,
    verifier::{check_commitments, check_share_against_checked},
};

/// Recover a secret element from the shares of one dealing.
///
/// Shares that fail verification, or repeat an index already accepted, are
/// skipped rather than treated as errors, so a minority of bad shares is
/// tolerated as long as `t` good ones remain. Of the verified shares, the `t`
/// with the lowest indices are interpolated; any extra are ignored.
pub fn reconstruct(
    shares: &[Share],
    commitments: &CommitmentSet,
    params: &VssParameters,
    ctx: &FieldContext,
) -> Result<BigUint> {
    let threshold = params.threshold();
    if let Err(err) = check_commitments(commitments, params, ctx) {
        debug!(%err, offered = shares.len(), "commitments rejected");
        return Err(VssError::InsufficientShares {
            required: threshold,
            verified: 0,
        });
    }

    let mut verified: BTreeMap<u32, &BigUint> = BTreeMap::new();
    for share in shares {
        let outcome = check_share_against_checked(share, commitments, params, ctx).and_then(|()| {
            if verified.contains_key(&share.x) {
                Err(ShareFault::DuplicateIndex(share.x).into())
            } else {
                Ok(())
            }
        });
        match outcome {
            Ok(()) => {
                verified.insert(share.x, &share.y);
            }
            Err(err) => trace!(index = share.x, %err, "share not counted"),
        }
    }

    if verified.len() < threshold {
        debug!(
            required = threshold,
            verified = verified.len(),
            offered = shares.len(),
            "too few verified shares"
        );
        return Err(VssError::InsufficientShares {
            required: threshold,
            verified: verified.len(),
        });
    }

    let (xc, mut yc): (Vec<BigUint>, Vec<BigUint>) = verified
        .into_iter()
        .take(threshold)
        .map(|(x, y)| (BigUint::from(x), y.clone()))
        .unzip();

    let secret = interpolate_at_zero(&xc, &yc, ctx);
    scrub_all(&mut yc);

    debug!(threshold, offered = shares.len(), "reconstructed secret element");
    secret
}
