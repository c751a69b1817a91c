use ark_secp256r1::{Affine, Fr};
use ark_std::{cfg_into_iter, rand::prelude::StdRng};
use blake2::Blake2b512;
use threshold_elgamal::{
    ciphertext::Ciphertext,
    decryption::DecryptBroadcast,
    keys::{keygen, JointPublicKey, PublicBroadcast, PublicKey, SecretKey},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const KEYGEN_CTX: &[u8] = b"bench-keygen";
pub const DECRYPT_CTX: &[u8] = b"bench-decrypt";

// Hardcoding party counts. This should ideally be taken/updated from command line input
pub const PARTY_COUNTS: [usize; 5] = [2, 4, 8, 16, 32];

/// Secret keys and broadcasts of `n` parties and the joint public key over all of them
pub fn setup_parties(
    rng: &mut StdRng,
    n: usize,
) -> (
    Vec<SecretKey<Fr>>,
    Vec<PublicBroadcast<Affine>>,
    JointPublicKey<Affine>,
) {
    let (secret_keys, broadcasts): (Vec<_>, Vec<_>) = (0..n)
        .map(|_| keygen::<_, Blake2b512, Affine>(rng, KEYGEN_CTX).unwrap())
        .unzip();
    let joint = JointPublicKey::combine(&broadcasts);
    (secret_keys, broadcasts, joint)
}

/// Decryption broadcasts of all parties for `ciphertext`, each party using its own rng
pub fn decrypt_broadcasts(
    secret_keys: &[SecretKey<Fr>],
    broadcasts: &[PublicBroadcast<Affine>],
    ciphertext: &Ciphertext<Affine>,
) -> Vec<(PublicKey<Affine>, DecryptBroadcast<Affine>)> {
    use ark_std::rand::SeedableRng;
    cfg_into_iter!(0..secret_keys.len())
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(i as u64);
            let b = secret_keys[i]
                .decrypt_share::<_, Blake2b512, _>(&mut rng, ciphertext, DECRYPT_CTX)
                .unwrap();
            (broadcasts[i].public_key, b)
        })
        .collect()
}
