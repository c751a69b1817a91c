//! ElGamal ciphertext and its homomorphic operations.
//!
//! A ciphertext of message `m` under joint key `J` with randomness `r` is `(r*g, r*J + m)`. Combining two
//! ciphertexts component-wise gives a ciphertext of the sum of their messages and scaling both components
//! by `s` gives a ciphertext of `s*m`. All operations return new ciphertexts.

use crate::error::ElgamalError;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    end_timer,
    iter::Sum,
    ops::{Add, Mul},
    start_timer,
    vec::Vec,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sigma_proofs::serde_utils::ArkObjectBytes;

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
pub struct Ciphertext<G: AffineRepr> {
    /// Ephemeral public key `r * g`
    #[serde_as(as = "ArkObjectBytes")]
    pub ephemeral: G,
    /// `r * J + m`
    #[serde_as(as = "ArkObjectBytes")]
    pub masked: G,
}

impl<G: AffineRepr> Ciphertext<G> {
    /// Neutral element of [`Self::combine`], both components are the identity
    pub fn identity() -> Self {
        Self {
            ephemeral: G::zero(),
            masked: G::zero(),
        }
    }

    /// `(scalar * g, point)`. Does not mask `point` with any key.
    pub fn create(scalar: &G::ScalarField, point: &G) -> Self {
        Self {
            ephemeral: G::generator().mul_bigint(scalar.into_bigint()).into_affine(),
            masked: *point,
        }
    }

    /// Component-wise group addition. Results in a ciphertext of the sum of both messages under the sum
    /// of both randomnesses.
    pub fn combine(&self, other: &Self) -> Self {
        let c = G::Group::normalize_batch(&[
            self.ephemeral.into_group() + other.ephemeral.into_group(),
            self.masked.into_group() + other.masked.into_group(),
        ]);
        Self {
            ephemeral: c[0],
            masked: c[1],
        }
    }

    /// Multiply both components by `scalar`
    pub fn scale(&self, scalar: &G::ScalarField) -> Self {
        let s = scalar.into_bigint();
        let c = G::Group::normalize_batch(&[self.ephemeral.mul_bigint(s), self.masked.mul_bigint(s)]);
        Self {
            ephemeral: c[0],
            masked: c[1],
        }
    }

    /// Combine all ciphertexts starting from [`Self::identity`]
    pub fn product<'a>(ciphertexts: impl IntoIterator<Item = &'a Self>) -> Self
    where
        G: 'a,
    {
        let (ephemeral, masked) = ciphertexts.into_iter().fold(
            (G::Group::zero(), G::Group::zero()),
            |(e, m), c| (e + c.ephemeral.into_group(), m + c.masked.into_group()),
        );
        Self::from_projective(ephemeral, masked)
    }

    /// `scalars[0] * ciphertexts[0] + scalars[1] * ciphertexts[1] + ...`, the lengths being equal by type
    pub fn weighted_combine<const N: usize>(
        ciphertexts: &[Self; N],
        scalars: &[G::ScalarField; N],
    ) -> Self {
        Self::msm(ciphertexts, scalars)
    }

    /// Same as [`Self::weighted_combine`] but for slices whose lengths are only known at runtime
    pub fn weighted_combine_slices(
        ciphertexts: &[Self],
        scalars: &[G::ScalarField],
    ) -> Result<Self, ElgamalError> {
        if ciphertexts.len() != scalars.len() {
            return Err(ElgamalError::LengthMismatch(
                ciphertexts.len(),
                scalars.len(),
            ));
        }
        Ok(Self::msm(ciphertexts, scalars))
    }

    fn msm(ciphertexts: &[Self], scalars: &[G::ScalarField]) -> Self {
        let msm_time = start_timer!(|| "Weighted combination of ciphertexts");
        let ephemerals = ciphertexts.iter().map(|c| c.ephemeral).collect::<Vec<_>>();
        let maskeds = ciphertexts.iter().map(|c| c.masked).collect::<Vec<_>>();
        let result = Self::from_projective(
            G::Group::msm_unchecked(&ephemerals, scalars),
            G::Group::msm_unchecked(&maskeds, scalars),
        );
        end_timer!(msm_time);
        result
    }

    pub(crate) fn from_projective(ephemeral: G::Group, masked: G::Group) -> Self {
        let c = G::Group::normalize_batch(&[ephemeral, masked]);
        Self {
            ephemeral: c[0],
            masked: c[1],
        }
    }
}

impl<G: AffineRepr> Add for Ciphertext<G> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl<G: AffineRepr> Mul<G::ScalarField> for Ciphertext<G> {
    type Output = Self;

    fn mul(self, rhs: G::ScalarField) -> Self {
        self.scale(&rhs)
    }
}

impl<'a, G: AffineRepr> Sum<&'a Ciphertext<G>> for Ciphertext<G> {
    fn sum<I: Iterator<Item = &'a Ciphertext<G>>>(iter: I) -> Self {
        Self::product(iter)
    }
}
