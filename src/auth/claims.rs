use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a session token. Stateless: nothing is stored server
/// side, a token dies by expiry or client discard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}
