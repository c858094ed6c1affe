use num_bigint::BigUint;

use crate::{ShareFault, VssError};

/// One holder's point `(x, y)` on a dealer's polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: u32,
    pub y: BigUint,
}

impl Share {
    pub fn new(x: u32, y: BigUint) -> Self {
        Self { x, y }
    }
}

/// Accepts an index as it might arrive from outside (signed), rejecting
/// negative or zero indices before any arithmetic sees them.
impl TryFrom<(i64, BigUint)> for Share {
    type Error = VssError;

    fn try_from((x, y): (i64, BigUint)) -> Result<Self, Self::Error> {
        if x < 0 {
            return Err(ShareFault::NegativeIndex(x).into());
        }
        if x == 0 {
            return Err(ShareFault::ZeroIndex.into());
        }
        let x = u32::try_from(x).map_err(|_| ShareFault::IndexOutOfRange {
            index: x,
            share_count: u32::MAX as usize,
        })?;
        Ok(Self { x, y })
    }
}

/// The dealer's public commitments `C_i = g^(a_i) mod p`, one per
/// polynomial coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitmentSet(Vec<BigUint>);

impl CommitmentSet {
    pub fn new(commitments: Vec<BigUint>) -> Self {
        Self(commitments)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[BigUint] {
        &self.0
    }

    /// `C_0 = g^secret`, the public image of the shared element.
    pub fn secret_commitment(&self) -> Option<&BigUint> {
        self.0.first()
    }
}

impl From<Vec<BigUint>> for CommitmentSet {
    fn from(commitments: Vec<BigUint>) -> Self {
        Self::new(commitments)
    }
}

/// Everything a single dealing produces for one secret element: `n` shares
/// and the commitments that back them, derived from one polynomial draw.
///
/// Only the dealer constructs bundles, so shares from different draws
/// cannot be mixed into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareBundle {
    shares: Vec<Share>,
    commitments: CommitmentSet,
}

impl ShareBundle {
    pub(crate) fn new(shares: Vec<Share>, commitments: CommitmentSet) -> Self {
        Self { shares, commitments }
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The share issued to holder `x`.
    pub fn share(&self, x: u32) -> Option<&Share> {
        self.shares.iter().find(|share| share.x == x)
    }

    pub fn commitments(&self) -> &CommitmentSet {
        &self.commitments
    }

    pub fn into_parts(self) -> (Vec<Share>, CommitmentSet) {
        (self.shares, self.commitments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_index_conversion() {
        let y = BigUint::from(5u32);
        assert_eq!(
            Share::try_from((3i64, y.clone())),
            Ok(Share::new(3, y.clone()))
        );
        assert_eq!(
            Share::try_from((-1i64, y.clone())),
            Err(VssError::InvalidShare(ShareFault::NegativeIndex(-1)))
        );
        assert_eq!(
            Share::try_from((0i64, y.clone())),
            Err(VssError::InvalidShare(ShareFault::ZeroIndex))
        );
        assert!(Share::try_from((i64::MAX, y)).is_err());
    }

    #[test]
    fn test_bundle_lookup() {
        let shares = vec![
            Share::new(1, BigUint::from(10u32)),
            Share::new(2, BigUint::from(20u32)),
        ];
        let commitments = CommitmentSet::new(vec![BigUint::from(4u32)]);
        let bundle = ShareBundle::new(shares, commitments.clone());
        assert_eq!(bundle.share(2).map(|s| &s.y), Some(&BigUint::from(20u32)));
        assert!(bundle.share(3).is_none());
        assert_eq!(bundle.commitments().secret_commitment(), Some(&BigUint::from(4u32)));
        let (shares, c) = bundle.into_parts();
        assert_eq!(shares.len(), 2);
        assert_eq!(c, commitments);
    }
}
