use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{FieldContext, Result, VssError, hazmat::scrub};

/// Calculate the Lagrange basis coefficients for the points `xc`,
/// evaluated at `x`:
///
/// ```text
///                ---     (x - xc[j])
///   values[i] =  | |   ---------------
///              j != i  (xc[i] - xc[j])
/// ```
///
/// Every difference is normalized into `[0, q - 1]` and every division is a
/// multiplication by a modular inverse. A zero denominator means two points
/// share an x coordinate, which callers must have ruled out already.
fn lagrange_basis(xc: &[BigUint], x: &BigUint, ctx: &FieldContext) -> Result<Vec<BigUint>> {
    xc.iter()
        .enumerate()
        .map(|(i, xi)| {
            let mut numerator = BigUint::one();
            let mut denominator = BigUint::one();
            for (j, xj) in xc.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator = ctx.mul(&numerator, &ctx.sub(x, xj));
                denominator = ctx.mul(&denominator, &ctx.sub(xi, xj));
            }
            let inverse = ctx
                .inverse(&denominator)
                .map_err(|_| VssError::ArithmeticFault("zero denominator in Lagrange basis"))?;
            Ok(ctx.mul(&numerator, &inverse))
        })
        .collect()
}

/// Interpolate the polynomial through the points `(xc[i], yc[i])` and
/// evaluate it at `x`.
pub(crate) fn interpolate(
    xc: &[BigUint],
    yc: &[BigUint],
    x: &BigUint,
    ctx: &FieldContext,
) -> Result<BigUint> {
    if xc.is_empty() || xc.len() != yc.len() {
        return Err(VssError::ArithmeticFault("mismatched interpolation points"));
    }
    let mut lagrange = lagrange_basis(xc, x, ctx)?;

    let mut result = BigUint::zero();
    for (li, yi) in lagrange.iter().zip(yc) {
        let mut term = ctx.mul(li, yi);
        result = ctx.add(&result, &term);
        scrub(&mut term);
    }

    // clean up
    lagrange.iter_mut().for_each(scrub);

    Ok(result)
}

/// Recover `f(0)` from points on `f`.
pub(crate) fn interpolate_at_zero(
    xc: &[BigUint],
    yc: &[BigUint],
    ctx: &FieldContext,
) -> Result<BigUint> {
    interpolate(xc, yc, &BigUint::zero(), ctx)
}
