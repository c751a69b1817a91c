//! Schnorr protocol for proving knowledge of a discrete log
//!
//! Given public `y` and `g`, prove knowledge of `x` in `g * x = y`:
//! 1. Prover chooses a random `r` and computes `t = g * r`
//! 2. Hashes `g`, `y`, `t` and a context towards getting a challenge `c`.
//! 3. Computes response `s = r + c*x` and sends `(t, s)` to the verifier.
//! 4. Verifier recomputes `c` and checks if `g * s = t + y*c`

use crate::{compute_random_oracle_challenge, error::ProofError, serde_utils::ArkObjectBytes};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public values of the relation `base * x = public`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscreteLogStatement<G: AffineRepr> {
    pub base: G,
    pub public: G,
}

/// Prover's state after committing to the randomness
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct DiscreteLogProtocol<G: AffineRepr> {
    /// Commitment to randomness
    #[zeroize(skip)]
    pub t: G,
    blinding: G::ScalarField,
    witness: G::ScalarField,
}

/// Non-interactive proof of knowledge of discrete log
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct DiscreteLogProof<G: AffineRepr> {
    #[serde_as(as = "ArkObjectBytes")]
    pub t: G,
    #[serde_as(as = "ArkObjectBytes")]
    pub response: G::ScalarField,
}

impl<G: AffineRepr> DiscreteLogStatement<G> {
    pub fn new(base: G, public: G) -> Self {
        Self { base, public }
    }

    /// Bytes of the statement and the prover's commitment that go into the challenge
    pub fn challenge_contribution<W: Write>(&self, t: &G, mut writer: W) -> Result<(), ProofError> {
        self.base.serialize_compressed(&mut writer)?;
        self.public.serialize_compressed(&mut writer)?;
        t.serialize_compressed(writer).map_err(|e| e.into())
    }

    fn challenge<D: Digest>(&self, t: &G, context: &[u8]) -> Result<G::ScalarField, ProofError> {
        let mut challenge_bytes = Vec::new();
        self.challenge_contribution(t, &mut challenge_bytes)?;
        challenge_bytes.extend_from_slice(context);
        Ok(compute_random_oracle_challenge::<G::ScalarField, D>(
            &challenge_bytes,
        ))
    }
}

impl<G: AffineRepr> DiscreteLogProtocol<G> {
    pub fn init(witness: G::ScalarField, blinding: G::ScalarField, base: &G) -> Self {
        let t = base.mul_bigint(blinding.into_bigint()).into_affine();
        Self {
            t,
            blinding,
            witness,
        }
    }

    pub fn challenge_contribution<W: Write>(
        &self,
        statement: &DiscreteLogStatement<G>,
        writer: W,
    ) -> Result<(), ProofError> {
        statement.challenge_contribution(&self.t, writer)
    }

    pub fn gen_proof(self, challenge: &G::ScalarField) -> DiscreteLogProof<G> {
        let response = self.blinding + (self.witness * *challenge);
        DiscreteLogProof {
            t: self.t,
            response,
        }
    }
}

impl<G: AffineRepr> DiscreteLogProof<G> {
    /// Prove knowledge of `witness` such that `statement.base * witness = statement.public`
    pub fn new<R: RngCore, D: Digest>(
        rng: &mut R,
        witness: G::ScalarField,
        statement: &DiscreteLogStatement<G>,
        context: &[u8],
    ) -> Result<Self, ProofError> {
        let blinding = G::ScalarField::rand(rng);
        let protocol = DiscreteLogProtocol::init(witness, blinding, &statement.base);
        let challenge = statement.challenge::<D>(&protocol.t, context)?;
        Ok(protocol.gen_proof(&challenge))
    }

    pub fn verify<D: Digest>(
        &self,
        statement: &DiscreteLogStatement<G>,
        context: &[u8],
    ) -> Result<(), ProofError> {
        let challenge = statement.challenge::<D>(&self.t, context)?;
        if self.verify_with_challenge(statement, &challenge) {
            Ok(())
        } else {
            Err(ProofError::InvalidProof)
        }
    }

    /// `base*response - public*challenge == t`
    pub fn verify_with_challenge(
        &self,
        statement: &DiscreteLogStatement<G>,
        challenge: &G::ScalarField,
    ) -> bool {
        let mut expected = statement.base.mul_bigint(self.response.into_bigint());
        expected -= statement.public.mul_bigint(challenge.into_bigint());
        expected.into_affine() == self.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_serialization;
    use ark_bls12_381::{Fr, G1Affine, G1Projective};
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use blake2::Blake2b512;

    #[test]
    fn prove_and_verify() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let base = G1Projective::rand(&mut rng).into_affine();
        let witness = Fr::rand(&mut rng);
        let public = base.mul_bigint(witness.into_bigint()).into_affine();
        let statement = DiscreteLogStatement::new(base, public);

        let proof =
            DiscreteLogProof::new::<_, Blake2b512>(&mut rng, witness, &statement, b"test").unwrap();
        proof.verify::<Blake2b512>(&statement, b"test").unwrap();

        // Context is bound to the proof
        assert!(matches!(
            proof.verify::<Blake2b512>(&statement, b"other"),
            Err(ProofError::InvalidProof)
        ));

        // Proof does not verify for a different public value
        let other = DiscreteLogStatement::new(base, G1Projective::rand(&mut rng).into_affine());
        assert!(proof.verify::<Blake2b512>(&other, b"test").is_err());

        test_serialization!(DiscreteLogProof<G1Affine>, proof);
    }

    #[test]
    fn two_step_protocol_matches_one_shot() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let base = G1Affine::generator();
        let witness = Fr::rand(&mut rng);
        let public = (base * witness).into_affine();
        let statement = DiscreteLogStatement::new(base, public);

        let blinding = Fr::rand(&mut rng);
        let protocol = DiscreteLogProtocol::init(witness, blinding, &base);
        let mut chal_contrib_prover = vec![];
        protocol
            .challenge_contribution(&statement, &mut chal_contrib_prover)
            .unwrap();
        chal_contrib_prover.extend_from_slice(b"ctx");
        let challenge = compute_random_oracle_challenge::<Fr, Blake2b512>(&chal_contrib_prover);
        let proof = protocol.gen_proof(&challenge);

        assert!(proof.verify_with_challenge(&statement, &challenge));
        proof.verify::<Blake2b512>(&statement, b"ctx").unwrap();
    }

    #[test]
    fn wrong_witness_fails() {
        let mut rng = StdRng::seed_from_u64(2u64);
        let base = G1Affine::generator();
        let witness = Fr::rand(&mut rng);
        let public = (base * witness).into_affine();
        let statement = DiscreteLogStatement::new(base, public);

        let wrong_witness = Fr::rand(&mut rng);
        let proof =
            DiscreteLogProof::new::<_, Blake2b512>(&mut rng, wrong_witness, &statement, b"ctx")
                .unwrap();
        assert!(proof.verify::<Blake2b512>(&statement, b"ctx").is_err());
    }
}
