use ark_serialize::SerializationError;

#[derive(Debug)]
pub enum ProofError {
    /// The proof's verification equation(s) did not hold
    InvalidProof,
    Serialization(SerializationError),
}

impl From<SerializationError> for ProofError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
