//! Chaum-Pedersen protocol for proving equality of discrete logs
//!
//! Given public `y1`, `g1`, `y2` and `g2`, prove knowledge of `x` in `g1 * x = y1` and `g2 * x = y2`:
//! 1. Prover chooses a random `r` and computes `t1 = g1 * r` and `t2 = g2 * r`
//! 2. Hashes `g1`, `y1`, `g2`, `y2`, `t1`, `t2` and a context towards getting a challenge `c`.
//! 3. Computes response `s = r + c*x` and sends `(t1, t2, s)` to the verifier.
//! 4. Verifier recomputes `c` and checks if `g1 * s = t1 + y1*c` and `g2 * s = t2 + y2*c`
//!
//! This is the same as running the protocol of [`crate::discrete_log`] twice with the same blinding and
//! the same challenge, which is what forces the two discrete logs to be equal.

use crate::{compute_random_oracle_challenge, error::ProofError, serde_utils::ArkObjectBytes};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public values of the relations `base1 * x = public1` and `base2 * x = public2`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscreteLogEqualityStatement<G: AffineRepr> {
    pub base1: G,
    pub public1: G,
    pub base2: G,
    pub public2: G,
}

/// Prover's state after committing to the randomness
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct DiscreteLogEqualityProtocol<G: AffineRepr> {
    #[zeroize(skip)]
    pub t1: G,
    #[zeroize(skip)]
    pub t2: G,
    blinding: G::ScalarField,
    witness: G::ScalarField,
}

/// Non-interactive proof of equality of discrete logs
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct DiscreteLogEqualityProof<G: AffineRepr> {
    #[serde_as(as = "ArkObjectBytes")]
    pub t1: G,
    #[serde_as(as = "ArkObjectBytes")]
    pub t2: G,
    #[serde_as(as = "ArkObjectBytes")]
    pub response: G::ScalarField,
}

impl<G: AffineRepr> DiscreteLogEqualityStatement<G> {
    pub fn new(base1: G, public1: G, base2: G, public2: G) -> Self {
        Self {
            base1,
            public1,
            base2,
            public2,
        }
    }

    pub fn challenge_contribution<W: Write>(
        &self,
        t1: &G,
        t2: &G,
        mut writer: W,
    ) -> Result<(), ProofError> {
        self.base1.serialize_compressed(&mut writer)?;
        self.public1.serialize_compressed(&mut writer)?;
        self.base2.serialize_compressed(&mut writer)?;
        self.public2.serialize_compressed(&mut writer)?;
        t1.serialize_compressed(&mut writer)?;
        t2.serialize_compressed(&mut writer)?;
        Ok(())
    }

    fn challenge<D: Digest>(
        &self,
        t1: &G,
        t2: &G,
        context: &[u8],
    ) -> Result<G::ScalarField, ProofError> {
        let mut challenge_bytes = Vec::new();
        self.challenge_contribution(t1, t2, &mut challenge_bytes)?;
        challenge_bytes.extend_from_slice(context);
        Ok(compute_random_oracle_challenge::<G::ScalarField, D>(
            &challenge_bytes,
        ))
    }
}

impl<G: AffineRepr> DiscreteLogEqualityProtocol<G> {
    pub fn init(witness: G::ScalarField, blinding: G::ScalarField, base1: &G, base2: &G) -> Self {
        let b = blinding.into_bigint();
        let t = G::Group::normalize_batch(&[base1.mul_bigint(b), base2.mul_bigint(b)]);
        Self {
            t1: t[0],
            t2: t[1],
            blinding,
            witness,
        }
    }

    pub fn challenge_contribution<W: Write>(
        &self,
        statement: &DiscreteLogEqualityStatement<G>,
        writer: W,
    ) -> Result<(), ProofError> {
        statement.challenge_contribution(&self.t1, &self.t2, writer)
    }

    pub fn gen_proof(self, challenge: &G::ScalarField) -> DiscreteLogEqualityProof<G> {
        let response = self.blinding + (self.witness * *challenge);
        DiscreteLogEqualityProof {
            t1: self.t1,
            t2: self.t2,
            response,
        }
    }
}

impl<G: AffineRepr> DiscreteLogEqualityProof<G> {
    /// Prove that `witness` is the discrete log of both `statement.public1` and `statement.public2`
    /// in bases `statement.base1` and `statement.base2` respectively
    pub fn new<R: RngCore, D: Digest>(
        rng: &mut R,
        witness: G::ScalarField,
        statement: &DiscreteLogEqualityStatement<G>,
        context: &[u8],
    ) -> Result<Self, ProofError> {
        let blinding = G::ScalarField::rand(rng);
        let protocol = DiscreteLogEqualityProtocol::init(
            witness,
            blinding,
            &statement.base1,
            &statement.base2,
        );
        let challenge = statement.challenge::<D>(&protocol.t1, &protocol.t2, context)?;
        Ok(protocol.gen_proof(&challenge))
    }

    pub fn verify<D: Digest>(
        &self,
        statement: &DiscreteLogEqualityStatement<G>,
        context: &[u8],
    ) -> Result<(), ProofError> {
        let challenge = statement.challenge::<D>(&self.t1, &self.t2, context)?;
        if self.verify_with_challenge(statement, &challenge) {
            Ok(())
        } else {
            Err(ProofError::InvalidProof)
        }
    }

    /// `base1*response - public1*challenge == t1` and `base2*response - public2*challenge == t2`
    pub fn verify_with_challenge(
        &self,
        statement: &DiscreteLogEqualityStatement<G>,
        challenge: &G::ScalarField,
    ) -> bool {
        let resp = self.response.into_bigint();
        let chal = challenge.into_bigint();
        let lhs1 = statement.base1.mul_bigint(resp) - statement.public1.mul_bigint(chal);
        let lhs2 = statement.base2.mul_bigint(resp) - statement.public2.mul_bigint(chal);
        lhs1.into_affine() == self.t1 && lhs2.into_affine() == self.t2
    }
}
