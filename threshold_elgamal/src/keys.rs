//! Per party key generation and aggregation of the joint public key.
//!
//! Each party creates a secret key and publishes its public key along with a proof of knowledge of the
//! secret key. The joint public key is the sum of all public keys, so decrypting under it needs every
//! party's secret key.

use crate::error::ElgamalError;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_iter, end_timer, rand::RngCore, start_timer, vec::Vec};
use digest::Digest;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sigma_proofs::{serde_utils::ArkObjectBytes, DiscreteLogProof, DiscreteLogStatement};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A party's share of the decryption key. Never leaves the party.
#[derive(
    Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop, CanonicalSerialize, CanonicalDeserialize,
)]
pub struct SecretKey<F: PrimeField>(pub(crate) F);

/// `secret_key * generator`
#[serde_as]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(bound = "")]
pub struct PublicKey<G: AffineRepr>(#[serde_as(as = "ArkObjectBytes")] pub G);

/// What a party sends to the others during key generation
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct PublicBroadcast<G: AffineRepr> {
    pub public_key: PublicKey<G>,
    /// Proof of knowledge of the secret key for `public_key`
    pub proof: DiscreteLogProof<G>,
}

/// Sum of the public keys of all parties. Ciphertexts are created under this key.
#[serde_as]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(bound = "")]
pub struct JointPublicKey<G: AffineRepr>(#[serde_as(as = "ArkObjectBytes")] pub G);

impl<F: PrimeField> SecretKey<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Self {
        Self(F::rand(rng))
    }
}

impl<G: AffineRepr> PublicKey<G> {
    pub fn new(secret_key: &SecretKey<G::ScalarField>) -> Self {
        Self(G::generator().mul_bigint(secret_key.0.into_bigint()).into_affine())
    }

    fn statement(&self) -> DiscreteLogStatement<G> {
        DiscreteLogStatement::new(G::generator(), self.0)
    }
}

/// Create a secret key and the broadcast carrying its public key. `context` binds the proof of knowledge
/// to the session and must be the same for all parties.
pub fn keygen<R: RngCore, D: Digest, G: AffineRepr>(
    rng: &mut R,
    context: &[u8],
) -> Result<(SecretKey<G::ScalarField>, PublicBroadcast<G>), ElgamalError> {
    let secret_key = SecretKey::new(rng);
    let broadcast = PublicBroadcast::new::<R, D>(rng, &secret_key, context)?;
    Ok((secret_key, broadcast))
}

impl<G: AffineRepr> PublicBroadcast<G> {
    pub fn new<R: RngCore, D: Digest>(
        rng: &mut R,
        secret_key: &SecretKey<G::ScalarField>,
        context: &[u8],
    ) -> Result<Self, ElgamalError> {
        let public_key = PublicKey::new(secret_key);
        let proof = DiscreteLogProof::new::<R, D>(
            rng,
            secret_key.0,
            &public_key.statement(),
            context,
        )?;
        Ok(Self { public_key, proof })
    }

    /// Check the proof of knowledge of the secret key against the generator and the public key
    pub fn verify<D: Digest>(&self, context: &[u8]) -> Result<(), ElgamalError> {
        self.proof
            .verify::<D>(&self.public_key.statement(), context)
            .map_err(|e| e.into())
    }
}

impl<G: AffineRepr> JointPublicKey<G> {
    /// Sum the public keys without checking any proof. Only use when the broadcasts were verified
    /// already.
    pub fn combine(broadcasts: &[PublicBroadcast<G>]) -> Self {
        Self::from_public_keys(broadcasts.iter().map(|b| &b.public_key))
    }

    /// Sum the public keys if every broadcast's proof verifies. A single invalid proof fails the whole
    /// aggregation with the index of the lowest offending broadcast.
    pub fn combine_verified<D: Digest>(
        broadcasts: &[PublicBroadcast<G>],
        context: &[u8],
    ) -> Result<Self, ElgamalError> {
        if broadcasts.is_empty() {
            return Err(ElgamalError::NoParticipants);
        }
        let combine_time = start_timer!(|| "Verify broadcasts and combine public keys");
        let invalid = cfg_iter!(broadcasts)
            .enumerate()
            .filter(|(_, b)| b.verify::<D>(context).is_err())
            .map(|(i, _)| i)
            .min();
        if let Some(i) = invalid {
            end_timer!(combine_time);
            return Err(ElgamalError::InvalidBroadcast(i));
        }
        let joint = Self::combine(broadcasts);
        end_timer!(combine_time);
        Ok(joint)
    }

    pub fn from_public_keys<'a>(public_keys: impl IntoIterator<Item = &'a PublicKey<G>>) -> Self {
        let sum = public_keys
            .into_iter()
            .fold(G::Group::zero(), |acc, pk| acc + pk.0.into_group());
        Self(sum.into_affine())
    }
}
