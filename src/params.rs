use num_bigint::BigUint;

use crate::{FieldContext, Result, VssError, constants::MAX_SHARE_COUNT};

/// The agreed threshold `t` and share count `n` of a dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VssParameters {
    threshold: usize,
    share_count: usize,
}

impl VssParameters {
    /// Requires `1 <= threshold <= share_count <= MAX_SHARE_COUNT`.
    pub fn new(threshold: usize, share_count: usize) -> Result<Self> {
        if share_count > MAX_SHARE_COUNT {
            return Err(VssError::TooManyShares(share_count));
        } else if threshold < 1 || threshold > share_count {
            return Err(VssError::InvalidThreshold {
                threshold,
                share_count,
            });
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn share_count(&self) -> usize {
        self.share_count
    }

    /// Every share index `1..=n` must be a distinct nonzero scalar, so `n`
    /// has to stay below the subgroup order.
    pub fn check_field(&self, ctx: &FieldContext) -> Result<()> {
        if BigUint::from(self.share_count) >= *ctx.order() {
            return Err(VssError::ShareCountExceedsField(self.share_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(VssParameters::new(1, 1).is_ok());
        assert!(VssParameters::new(2, 4).is_ok());
        assert!(VssParameters::new(4, 4).is_ok());
        assert_eq!(
            VssParameters::new(0, 4),
            Err(VssError::InvalidThreshold { threshold: 0, share_count: 4 })
        );
        assert_eq!(
            VssParameters::new(5, 4),
            Err(VssError::InvalidThreshold { threshold: 5, share_count: 4 })
        );
        assert_eq!(
            VssParameters::new(2, MAX_SHARE_COUNT + 1),
            Err(VssError::TooManyShares(MAX_SHARE_COUNT + 1))
        );
        assert!(VssParameters::new(0, 4).unwrap_err().is_parameter_error());
    }

    #[test]
    fn test_check_field() {
        let ctx = FieldContext::new(BigUint::from(23u32), BigUint::from(11u32)).unwrap();
        assert!(VssParameters::new(3, 10).unwrap().check_field(&ctx).is_ok());
        assert_eq!(
            VssParameters::new(3, 11).unwrap().check_field(&ctx),
            Err(VssError::ShareCountExceedsField(11))
        );
    }
}
