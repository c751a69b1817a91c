//! Encryption under the joint public key and re-randomization of ciphertexts

use crate::{ciphertext::Ciphertext, encoding::Message, keys::JointPublicKey};
use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Randomness `r` of an encryption. Knowing it allows decrypting the ciphertext without the secret keys
/// so it must be discarded or kept as secret as a secret key.
#[derive(
    Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop, CanonicalSerialize, CanonicalDeserialize,
)]
pub struct EncryptionRandomness<F: PrimeField>(F);

impl<F: PrimeField> EncryptionRandomness<F> {
    pub fn rand<R: RngCore>(rng: &mut R) -> Self {
        Self(F::rand(rng))
    }

    /// Predictable randomness for reproducible tests. Never use it to encrypt anything secret.
    #[cfg(any(test, feature = "testing"))]
    pub fn one() -> Self {
        Self(<F as ark_ff::One>::one())
    }

    pub fn as_scalar(&self) -> &F {
        &self.0
    }
}

impl<G: AffineRepr> JointPublicKey<G> {
    /// `(r * g, r * J + m)`
    pub fn encrypt(
        &self,
        message: &Message<G>,
        randomness: &EncryptionRandomness<G::ScalarField>,
    ) -> Ciphertext<G> {
        let r = randomness.0.into_bigint();
        let masked = self.0.mul_bigint(r) + message.0.into_group();
        Ciphertext::from_projective(G::generator().mul_bigint(r), masked)
    }

    /// Encrypt with fresh randomness. Returns the ciphertext and the randomness used.
    pub fn encrypt_random<R: RngCore>(
        &self,
        rng: &mut R,
        message: &Message<G>,
    ) -> (Ciphertext<G>, EncryptionRandomness<G::ScalarField>) {
        let randomness = EncryptionRandomness::rand(rng);
        (self.encrypt(message, &randomness), randomness)
    }

    /// Encryption of the identity element, `(r * g, r * J)`
    pub fn encrypt_identity(
        &self,
        randomness: &EncryptionRandomness<G::ScalarField>,
    ) -> Ciphertext<G> {
        self.encrypt(&Message(G::zero()), randomness)
    }

    /// Ciphertext of the same message as `ciphertext` whose randomness is shifted by `randomness`. Without
    /// `randomness` the result can't be linked to `ciphertext`.
    pub fn re_randomize(
        &self,
        randomness: &EncryptionRandomness<G::ScalarField>,
        ciphertext: &Ciphertext<G>,
    ) -> Ciphertext<G> {
        self.encrypt_identity(randomness).combine(ciphertext)
    }

    pub fn re_randomize_random<R: RngCore>(
        &self,
        rng: &mut R,
        ciphertext: &Ciphertext<G>,
    ) -> Ciphertext<G> {
        self.re_randomize(&EncryptionRandomness::rand(rng), ciphertext)
    }

    /// Re-randomize every ciphertext of `ciphertexts`, each with independent randomness
    pub fn re_randomize_all<R: RngCore>(
        &self,
        rng: &mut R,
        ciphertexts: &[Ciphertext<G>],
    ) -> Vec<Ciphertext<G>> {
        ciphertexts
            .iter()
            .map(|c| self.re_randomize_random(rng, c))
            .collect()
    }
}
