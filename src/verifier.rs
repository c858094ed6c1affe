use num_bigint::BigUint;
use num_traits::One;

use crate::{CommitmentSet, FieldContext, Result, Share, ShareFault, VssParameters};

/// Check `share` against the dealer's published commitments:
///
/// ```text
/// g^y == C_0 * C_1^x * C_2^(x^2) * ... * C_(t-1)^(x^(t-1))   (mod p)
/// ```
///
/// Returns the first structural or cryptographic fault found. Neither the
/// secret nor any other share is needed.
pub fn check_share(
    share: &Share,
    commitments: &CommitmentSet,
    params: &VssParameters,
    ctx: &FieldContext,
) -> Result<()> {
    check_share_fields(share, params, ctx)?;
    check_commitments(commitments, params, ctx)?;
    check_equation(share, commitments, ctx)
}

/// `check_share` for commitments that already passed `check_commitments`.
pub(crate) fn check_share_against_checked(
    share: &Share,
    commitments: &CommitmentSet,
    params: &VssParameters,
    ctx: &FieldContext,
) -> Result<()> {
    check_share_fields(share, params, ctx)?;
    check_equation(share, commitments, ctx)
}

/// The commitment set has one entry per coefficient and every entry lies in
/// the order-`q` subgroup.
pub(crate) fn check_commitments(
    commitments: &CommitmentSet,
    params: &VssParameters,
    ctx: &FieldContext,
) -> Result<()> {
    if commitments.len() != params.threshold() {
        return Err(ShareFault::CommitmentCountMismatch {
            expected: params.threshold(),
            found: commitments.len(),
        }
        .into());
    }
    if let Some(position) = commitments
        .as_slice()
        .iter()
        .position(|c| !ctx.is_group_element(c))
    {
        return Err(ShareFault::CommitmentOutOfGroup(position).into());
    }
    Ok(())
}

fn check_share_fields(share: &Share, params: &VssParameters, ctx: &FieldContext) -> Result<()> {
    if share.x == 0 {
        return Err(ShareFault::ZeroIndex.into());
    }
    if share.x as usize > params.share_count() {
        return Err(ShareFault::IndexOutOfRange {
            index: share.x as i64,
            share_count: params.share_count(),
        }
        .into());
    }
    if !ctx.contains_scalar(&share.y) {
        return Err(ShareFault::ValueOutOfRange.into());
    }
    Ok(())
}

fn check_equation(share: &Share, commitments: &CommitmentSet, ctx: &FieldContext) -> Result<()> {
    let x = BigUint::from(share.x);
    let mut x_power = BigUint::one();
    let mut expected = BigUint::one();
    for commitment in commitments.as_slice() {
        expected = ctx.group_mul(&expected, &ctx.group_pow(commitment, &x_power));
        x_power = ctx.mul(&x_power, &x);
    }

    if ctx.commit(&share.y) != expected {
        return Err(ShareFault::CommitmentMismatch.into());
    }
    Ok(())
}

/// True if `share` is well formed and consistent with `commitments`.
pub fn verify(
    share: &Share,
    commitments: &CommitmentSet,
    params: &VssParameters,
    ctx: &FieldContext,
) -> bool {
    check_share(share, commitments, params, ctx).is_ok()
}
