//! Verifiable n-of-n threshold decryption.
//!
//! For a ciphertext `(R, C)` each party `i` publishes its decryption share `D_i = sk_i * R` with a proof
//! that `log_g(pk_i) = log_R(D_i)`. Once the shares of all parties are verified, the message is
//! `C - (D_1 + D_2 + ... + D_n)`. One invalid share fails the whole decryption and nothing about the
//! message is returned.

use crate::{
    ciphertext::Ciphertext,
    encoding::Message,
    error::ElgamalError,
    keys::{PublicKey, SecretKey},
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_iter, end_timer, rand::RngCore, start_timer, vec::Vec};
use digest::Digest;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sigma_proofs::{
    serde_utils::ArkObjectBytes, DiscreteLogEqualityProof, DiscreteLogEqualityStatement,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `secret_key * ephemeral` for a party's secret key and a ciphertext's ephemeral key
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
pub struct DecryptShare<G: AffineRepr>(#[serde_as(as = "ArkObjectBytes")] pub G);

/// What a party sends to the others to decrypt a ciphertext. Only valid for that ciphertext.
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct DecryptBroadcast<G: AffineRepr> {
    pub share: DecryptShare<G>,
    /// Proof that the share was created with the secret key of the sender's public key
    pub proof: DiscreteLogEqualityProof<G>,
}

fn share_statement<G: AffineRepr>(
    ciphertext: &Ciphertext<G>,
    public_key: &PublicKey<G>,
    share: &DecryptShare<G>,
) -> DiscreteLogEqualityStatement<G> {
    DiscreteLogEqualityStatement::new(G::generator(), public_key.0, ciphertext.ephemeral, share.0)
}

impl<F: PrimeField> SecretKey<F> {
    /// Decryption share without a proof
    pub fn partial_decrypt<G: AffineRepr<ScalarField = F>>(
        &self,
        ciphertext: &Ciphertext<G>,
    ) -> DecryptShare<G> {
        DecryptShare(
            ciphertext
                .ephemeral
                .mul_bigint(self.0.into_bigint())
                .into_affine(),
        )
    }

    /// Decryption share along with the proof of its correctness. `context` must be the same for all
    /// parties decrypting this ciphertext.
    pub fn decrypt_share<R: RngCore, D: Digest, G: AffineRepr<ScalarField = F>>(
        &self,
        rng: &mut R,
        ciphertext: &Ciphertext<G>,
        context: &[u8],
    ) -> Result<DecryptBroadcast<G>, ElgamalError> {
        let share = self.partial_decrypt(ciphertext);
        let statement = share_statement(ciphertext, &PublicKey::new(self), &share);
        let proof = DiscreteLogEqualityProof::new::<R, D>(rng, self.0, &statement, context)?;
        Ok(DecryptBroadcast { share, proof })
    }

    /// Decrypt alone. Only recovers the message when the joint public key consists of this key alone.
    pub fn decrypt<G: AffineRepr<ScalarField = F>>(&self, ciphertext: &Ciphertext<G>) -> Message<G> {
        ciphertext.unmask(self.partial_decrypt(ciphertext).0.into_group())
    }
}

impl<G: AffineRepr> DecryptBroadcast<G> {
    /// Check that the share was computed with the secret key of `public_key` on `ciphertext`
    pub fn verify<D: Digest>(
        &self,
        ciphertext: &Ciphertext<G>,
        public_key: &PublicKey<G>,
        context: &[u8],
    ) -> Result<(), ElgamalError> {
        let statement = share_statement(ciphertext, public_key, &self.share);
        self.proof
            .verify::<D>(&statement, context)
            .map_err(|e| e.into())
    }
}

impl<G: AffineRepr> Ciphertext<G> {
    /// Decrypt using the broadcasts of all parties. Every broadcast is verified against the paired
    /// public key and the first invalid one fails the decryption.
    pub fn verifiable_decrypt<D: Digest>(
        &self,
        decrypts: &[(PublicKey<G>, DecryptBroadcast<G>)],
        context: &[u8],
    ) -> Result<Message<G>, ElgamalError> {
        if decrypts.is_empty() {
            return Err(ElgamalError::NoParticipants);
        }
        let decrypt_time = start_timer!(|| "Verifiable decryption");
        let shares_sum = self.verified_shares_sum::<D>(decrypts, context);
        end_timer!(decrypt_time);
        Ok(self.unmask(shares_sum?))
    }

    /// Decrypt using the caller's own share, which isn't verified, and the broadcasts of all other
    /// parties, which are. Gives the same result as [`Self::verifiable_decrypt`] with all broadcasts.
    pub fn verifiable_decrypt_own<D: Digest>(
        &self,
        own_share: &DecryptShare<G>,
        others: &[(PublicKey<G>, DecryptBroadcast<G>)],
        context: &[u8],
    ) -> Result<Message<G>, ElgamalError> {
        let decrypt_time = start_timer!(|| "Verifiable decryption with own share");
        let shares_sum = self.verified_shares_sum::<D>(others, context);
        end_timer!(decrypt_time);
        Ok(self.unmask(shares_sum? + own_share.0.into_group()))
    }

    /// Sum of the shares if all broadcasts verify else the index of the lowest failing one
    fn verified_shares_sum<D: Digest>(
        &self,
        decrypts: &[(PublicKey<G>, DecryptBroadcast<G>)],
        context: &[u8],
    ) -> Result<G::Group, ElgamalError> {
        let invalid = cfg_iter!(decrypts)
            .enumerate()
            .filter(|(_, (pk, b))| b.verify::<D>(self, pk, context).is_err())
            .map(|(i, _)| i)
            .min();
        if let Some(i) = invalid {
            return Err(ElgamalError::InvalidDecryptShare(i));
        }
        Ok(decrypts
            .iter()
            .fold(G::Group::zero(), |acc, (_, b)| acc + b.share.0.into_group()))
    }

    fn unmask(&self, shares_sum: G::Group) -> Message<G> {
        Message::from_point((self.masked.into_group() - shares_sum).into_affine())
    }
}
