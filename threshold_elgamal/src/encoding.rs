//! Koblitz encoding of integers as curve points
//!
//! ElGamal only encrypts group elements, so an integer `n` is mapped to a point whose x-coordinate
//! lies in the block `[n*k + 1, n*k + k - 1]` where `k` is the encoding factor. The first x in the
//! block (smallest first) for which the curve has a point in the prime order subgroup is taken and
//! of its two points, the one with the smaller `y`. Roughly half of all x-coordinates are on the
//! curve, so the search fails for a block with probability about `2^-(k-1)`.
//!
//! This estimate only holds when every point of the curve is in the prime order subgroup, so only
//! curves with cofactor 1 (secp256r1, secp256k1, ...) are accepted. Others give
//! [`ElgamalError::UnsupportedCurve`].
//!
//! Decoding is `(x - 1) / k` with integer division, which is exact because the search never
//! leaves the block.

use crate::error::ElgamalError;
use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr,
};
use ark_ff::{One, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, start_timer, vec::Vec};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sigma_proofs::serde_utils::ArkObjectBytes;

/// Encoding factor used by [`MessageEncoder::default`]
pub const DEFAULT_ENCODING_FACTOR: u64 = 47;

/// A group element that is the image of an integer under the encoding or the result of a decryption.
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
pub struct Message<G: AffineRepr>(#[serde_as(as = "ArkObjectBytes")] pub(crate) G);

impl<G: AffineRepr> Message<G> {
    pub(crate) fn from_point(point: G) -> Self {
        Self(point)
    }

    pub fn point(&self) -> &G {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageEncoder {
    factor: u64,
}

impl Default for MessageEncoder {
    fn default() -> Self {
        Self {
            factor: DEFAULT_ENCODING_FACTOR,
        }
    }
}

impl MessageEncoder {
    pub fn new(factor: u64) -> Result<Self, ElgamalError> {
        if factor < 3 || factor % 2 == 0 {
            return Err(ElgamalError::InvalidEncodingFactor(factor));
        }
        Ok(Self { factor })
    }

    pub fn factor(&self) -> u64 {
        self.factor
    }

    /// Map `value` to a point. Deterministic given the value, the factor and the curve.
    pub fn encode<P: SWCurveConfig>(&self, value: u64) -> Result<Message<Affine<P>>, ElgamalError>
    where
        P::BaseField: PrimeField,
    {
        if !matches!(
            P::COFACTOR.split_first(),
            Some((&1, rest)) if rest.iter().all(|w| *w == 0)
        ) {
            return Err(ElgamalError::UnsupportedCurve);
        }
        // Largest candidate is `value*factor + factor - 1`, it must be a canonical field element
        let block_end = BigUint::from(value) * self.factor + self.factor;
        if block_end.bits() >= P::BaseField::MODULUS_BIT_SIZE as u64 {
            return Err(ElgamalError::EncodingOverflow(value));
        }

        let encode_time = start_timer!(|| "Koblitz encoding");
        let mut x = P::BaseField::from(value) * P::BaseField::from(self.factor)
            + P::BaseField::one();
        for _ in 1..self.factor {
            if let Some(point) = Affine::<P>::get_point_from_x_unchecked(x, false) {
                if point.is_in_correct_subgroup_assuming_on_curve() {
                    end_timer!(encode_time);
                    return Ok(Message(point));
                }
            }
            x += P::BaseField::one();
        }
        end_timer!(encode_time);
        Err(ElgamalError::EncodingExhausted {
            value,
            factor: self.factor,
        })
    }

    /// Recover the integer from a point created by [`Self::encode`]
    pub fn decode<P: SWCurveConfig>(&self, message: &Message<Affine<P>>) -> Result<u64, ElgamalError>
    where
        P::BaseField: PrimeField,
    {
        let point = message.point();
        if point.infinity {
            return Err(ElgamalError::MessageNotDecodable);
        }
        let x: BigUint = point.x.into();
        let one = BigUint::from(1u8);
        if x < one {
            return Err(ElgamalError::MessageNotDecodable);
        }
        let offset = x - one;
        // The last x-coordinate of every block is never tried by the encoder
        if offset.clone() % self.factor == BigUint::from(self.factor - 1) {
            return Err(ElgamalError::MessageNotDecodable);
        }
        u64::try_from(offset / self.factor).map_err(|_| ElgamalError::MessageNotDecodable)
    }
}
