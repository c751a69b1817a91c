#![cfg_attr(not(feature = "std"), no_std)]

//! # (n,n)-threshold ElGamal over elliptic curves
//!
//! A message encrypted under the joint public key of `n` parties can only be decrypted when all `n` parties
//! publish their decryption shares and every share comes with a valid proof of correctness.
//!
//! 1. [Encoding of integers as curve points](./src/encoding.rs)
//! 1. [Key generation with proof of knowledge of the secret key and aggregation of the joint public key](./src/keys.rs)
//! 1. [Ciphertext and its homomorphic operations](./src/ciphertext.rs)
//! 1. [Encryption and re-randomization](./src/encryption.rs)
//! 1. [Verifiable threshold decryption](./src/decryption.rs)
//!
//! A session looks like:
//! - Each party calls [`keys::keygen`] and sends its [`keys::PublicBroadcast`] to all others.
//! - Everyone computes [`keys::JointPublicKey::combine_verified`] over all broadcasts.
//! - Integers are mapped to points with [`encoding::MessageEncoder`] and encrypted with
//!   [`keys::JointPublicKey::encrypt_random`]. Ciphertexts can be combined, scaled and re-randomized.
//! - To decrypt, each party sends [`keys::SecretKey::decrypt_share`] to the others and anyone holding all
//!   broadcasts calls [`ciphertext::Ciphertext::verifiable_decrypt`].
//!
//! The proofs of knowledge and of correct decryption are the sigma protocols of the `sigma_proofs` crate
//! made non-interactive with the digest `D` chosen by the caller. The `context` passed while creating and
//! verifying these proofs must match.

pub mod ciphertext;
pub mod decryption;
pub mod encoding;
pub mod encryption;
pub mod error;
pub mod keys;

pub mod prelude {
    pub use crate::{
        ciphertext::Ciphertext,
        decryption::{DecryptBroadcast, DecryptShare},
        encoding::{Message, MessageEncoder, DEFAULT_ENCODING_FACTOR},
        encryption::EncryptionRandomness,
        error::ElgamalError,
        keys::{keygen, JointPublicKey, PublicBroadcast, PublicKey, SecretKey},
    };
}
