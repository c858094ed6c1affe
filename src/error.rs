use thiserror::Error;

/// Why a share was not counted toward the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShareFault {
    #[error("share index 0 is reserved for the secret")]
    ZeroIndex,
    #[error("share index {0} is negative")]
    NegativeIndex(i64),
    #[error("share index {index} is outside 1..={share_count}")]
    IndexOutOfRange { index: i64, share_count: usize },
    #[error("share index {0} appears more than once")]
    DuplicateIndex(u32),
    #[error("share value is not reduced modulo the subgroup order")]
    ValueOutOfRange,
    #[error("expected {expected} commitments, found {found}")]
    CommitmentCountMismatch { expected: usize, found: usize },
    #[error("commitment {0} is not in the commitment subgroup")]
    CommitmentOutOfGroup(usize),
    #[error("share does not match the published commitments")]
    CommitmentMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VssError {
    #[error("invalid threshold: {threshold} of {share_count}")]
    InvalidThreshold { threshold: usize, share_count: usize },
    #[error("too many shares: {0}")]
    TooManyShares(usize),
    #[error("subgroup order is not prime")]
    SubgroupOrderNotPrime,
    #[error("modulus is not prime")]
    ModulusNotPrime,
    #[error("subgroup order does not divide modulus - 1")]
    SubgroupOrderMismatch,
    #[error("no prime modulus found within {0} candidates")]
    ModulusSearchExhausted(usize),
    #[error("no subgroup generator found within {0} candidates")]
    GeneratorSearchExhausted(u32),
    #[error("generator does not have the subgroup order")]
    InvalidGenerator,
    #[error("share count {0} does not fit below the subgroup order")]
    ShareCountExceedsField(usize),
    #[error("secret element is not below the subgroup order")]
    SecretOutOfRange,
    #[error("secret is empty")]
    EmptySecret,
    #[error("subgroup order is too small to hold a byte")]
    SubgroupTooSmallForCodec,
    #[error("expected {expected} secret elements, found {found}")]
    ElementCountMismatch { expected: usize, found: usize },
    #[error("invalid share: {0}")]
    InvalidShare(#[from] ShareFault),
    #[error("insufficient shares: need {required}, verified {verified}")]
    InsufficientShares { required: usize, verified: usize },
    #[error("no modular inverse exists")]
    NoInverse,
    #[error("arithmetic fault: {0}")]
    ArithmeticFault(&'static str),
    #[error("recovered element does not decode to secret bytes")]
    MalformedElement,
}

impl VssError {
    /// True for setup failures: bad `(t, n, q)` or exhausted searches.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            VssError::InvalidThreshold { .. }
                | VssError::TooManyShares(_)
                | VssError::SubgroupOrderNotPrime
                | VssError::ModulusNotPrime
                | VssError::SubgroupOrderMismatch
                | VssError::ModulusSearchExhausted(_)
                | VssError::GeneratorSearchExhausted(_)
                | VssError::InvalidGenerator
                | VssError::ShareCountExceedsField(_)
                | VssError::SecretOutOfRange
                | VssError::EmptySecret
                | VssError::SubgroupTooSmallForCodec
                | VssError::ElementCountMismatch { .. }
        )
    }
}

pub type Result<T, E = VssError> = std::result::Result<T, E>;
