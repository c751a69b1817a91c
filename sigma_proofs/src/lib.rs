#![cfg_attr(not(feature = "std"), no_std)]

//! Non-interactive sigma protocols used by the threshold ElGamal crates.
//!
//! 1. [Proof of knowledge of a discrete log](./src/discrete_log.rs), i.e. given public `y` and `g`, prove knowledge of `x` in `g * x = y`
//! 1. [Proof of equality of discrete logs](./src/discrete_log_equality.rs), i.e. given public `y1`, `g1`, `y2` and `g2`, prove knowledge
//!    of `x` in `g1 * x = y1` and `g2 * x = y2` (Chaum-Pedersen)
//!
//! Both proofs are made non-interactive with Fiat-Shamir. The challenge is computed over the bases, the public values,
//! the prover's commitments and a caller supplied context which binds the proof to a session or protocol step.

use ark_ff::PrimeField;
use ark_std::vec::Vec;
use digest::Digest;

pub mod discrete_log;
pub mod discrete_log_equality;
pub mod error;
pub mod serde_utils;

pub use discrete_log::{DiscreteLogProof, DiscreteLogProtocol, DiscreteLogStatement};
pub use discrete_log_equality::{
    DiscreteLogEqualityProof, DiscreteLogEqualityProtocol, DiscreteLogEqualityStatement,
};

/// Hash the challenge bytes to a field element using try-and-increment. Vulnerable to side channel
/// attacks, so only use it with public input like a proof transcript.
pub fn compute_random_oracle_challenge<F: PrimeField, D: Digest>(challenge_bytes: &[u8]) -> F {
    let mut hash = D::digest(challenge_bytes);
    let mut attempt = 1u64;
    loop {
        if let Some(f) = F::from_random_bytes(&hash) {
            return f;
        }
        let mut bytes = Vec::with_capacity(challenge_bytes.len() + 17);
        bytes.extend_from_slice(challenge_bytes);
        bytes.extend_from_slice(b"-attempt-");
        bytes.extend_from_slice(&attempt.to_le_bytes());
        hash = D::digest(&bytes);
        attempt += 1;
    }
}

/// Checks canonical (compressed and uncompressed) and JSON serialization of `$obj` round-trips.
#[doc(hidden)]
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: expr) => {
        let mut serz = vec![];
        ark_serialize::CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        let deserz: $obj_type =
            ark_serialize::CanonicalDeserialize::deserialize_compressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let mut serz = vec![];
        ark_serialize::CanonicalSerialize::serialize_uncompressed(&$obj, &mut serz).unwrap();
        let deserz: $obj_type =
            ark_serialize::CanonicalDeserialize::deserialize_uncompressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let ser = serde_json::to_string(&$obj).unwrap();
        let deser = serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}
