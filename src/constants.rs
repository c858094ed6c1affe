/// Largest number of shares a single dealing may produce.
pub const MAX_SHARE_COUNT: usize = 65_535;

/// Order of the commitment subgroup used when the caller has no preference:
/// the Mersenne prime 2^61 - 1.
pub const DEFAULT_SUBGROUP_ORDER: u64 = 2_305_843_009_213_693_951;

/// Number of candidates `k * q + 1` examined before modulus selection gives up.
pub const MODULUS_SEARCH_LIMIT: usize = 100_000;

/// Number of bases `h` tried before generator selection gives up.
pub const GENERATOR_SEARCH_LIMIT: u32 = 1_000;

/// Witnesses for the Miller-Rabin test. Deterministic below 3.3 * 10^24,
/// probabilistic (error < 4^-20) above.
pub const MILLER_RABIN_BASES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];
