use ark_serialize::SerializationError;
use sigma_proofs::error::ProofError;

#[derive(Debug)]
pub enum ElgamalError {
    /// No x-coordinate in the block of `value` gave a point in the group
    EncodingExhausted { value: u64, factor: u64 },
    /// The block of the value does not fit below the base field modulus
    EncodingOverflow(u64),
    /// The encoding factor must be odd and greater than 1
    InvalidEncodingFactor(u64),
    /// Encoding needs a curve with cofactor 1
    UnsupportedCurve,
    /// The point is not the image of any value under the encoding
    MessageNotDecodable,
    /// Index of the first broadcast whose proof of knowledge of secret key failed
    InvalidBroadcast(usize),
    /// Index of the first decryption share whose proof failed
    InvalidDecryptShare(usize),
    NoParticipants,
    LengthMismatch(usize, usize),
    Proof(ProofError),
    Serialization(SerializationError),
}

impl From<ProofError> for ElgamalError {
    fn from(e: ProofError) -> Self {
        Self::Proof(e)
    }
}

impl From<SerializationError> for ElgamalError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
