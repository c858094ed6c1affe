#![doc(html_root_url = "https://docs.rs/bc-vss/0.1.0")]

//! # Introduction
//!
//! Feldman Verifiable Secret Sharing (VSS). A dealer splits a secret into
//! `n` shares, any `t` of which recover it, and publishes a commitment to
//! each coefficient of the sharing polynomial. Every holder can check its
//! own share against those commitments without trusting the dealer and
//! without learning anything about the secret.
//!
//! # Getting Started
//!
//! ```toml
//! [dependencies]
//! bc-vss = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```
//! use bc_rand::SecureRandomNumberGenerator;
//! use bc_vss::{
//!     BigUint, FieldContext, VssParameters, DEFAULT_SUBGROUP_ORDER,
//!     split_secret, recover_secret, verify,
//! };
//!
//! let ctx = FieldContext::from_subgroup_order(&BigUint::from(DEFAULT_SUBGROUP_ORDER)).unwrap();
//! let params = VssParameters::new(2, 3).unwrap();
//! let mut rng = SecureRandomNumberGenerator;
//!
//! let split = split_secret(b"my secret belongs to me.", &params, &ctx, &mut rng).unwrap();
//!
//! // Each holder checks its shares against the published commitments.
//! for bundle in split.bundles() {
//!     for share in bundle.shares() {
//!         assert!(verify(share, bundle.commitments(), &params, &ctx));
//!     }
//! }
//!
//! // Any two holders recover the secret.
//! let shares: Vec<_> = split
//!     .bundles()
//!     .iter()
//!     .map(|bundle| vec![bundle.share(1).unwrap().clone(), bundle.share(3).unwrap().clone()])
//!     .collect();
//! let secret = recover_secret(split.secret_length(), &shares, &split.commitments(), &params, &ctx).unwrap();
//! assert_eq!(secret, b"my secret belongs to me.");
//! ```

mod constants;
pub use constants::{
    DEFAULT_SUBGROUP_ORDER, GENERATOR_SEARCH_LIMIT, MAX_SHARE_COUNT, MILLER_RABIN_BASES,
    MODULUS_SEARCH_LIMIT,
};

mod error;
pub use error::{Result, ShareFault, VssError};

mod hazmat;
mod interpolate;

mod primes;
pub use primes::is_probable_prime;

mod field;
pub use field::{FieldContext, find_generator, mod_inverse, select_modulus};

mod params;
pub use params::VssParameters;

mod share;
pub use share::{CommitmentSet, Share, ShareBundle};

mod polynomial;

mod dealer;
pub use dealer::distribute;

mod verifier;
pub use verifier::{check_share, verify};

mod reconstructor;
pub use reconstructor::reconstruct;

mod codec;
pub use codec::{decode_secret, element_count, element_width, encode_secret};

mod vss;
pub use vss::{SplitSecret, recover_secret, split_secret};

pub use num_bigint::BigUint;
