//! Verification token generation.
//!
//! Every member gets a hash at signup; it is embedded in their verification
//! link. The token is the hex SHA-256 of a random UUID: unguessable, and
//! uniform in shape regardless of member data.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a fresh verification hash.
pub fn generate_verification_hash() -> String {
    let seed = Uuid::new_v4();
    hex::encode(Sha256::digest(seed.as_bytes()))
}
