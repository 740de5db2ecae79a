// common/src/utils.rs
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Serialize, Deserialize};
use chrono::Utc;

/// Setup tracing for consistent logging across crates
pub fn setup_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

// Claims carried in the backend's access token
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,       // user id
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,        // expiration time
    #[serde(default)]
    pub iat: usize,        // issued at time
}

// Decode token claims WITHOUT verifying the signature. The client never
// holds the signing secret; this is a convenience read of the embedded
// expiry, not a trust boundary.
pub fn decode_claims_unchecked(token: &str) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    let token_data = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(&[]),
        &validation
    )?;

    Ok(token_data.claims)
}

// Whether the token's embedded expiry is in the past. A token whose
// claims cannot be decoded at all counts as expired.
pub fn token_expired(token: &str) -> bool {
    match decode_claims_unchecked(token) {
        Ok(claims) => (claims.exp as i64) <= Utc::now().timestamp(),
        Err(e) => {
            tracing::debug!("Token claims undecodable, treating as expired: {}", e);
            true
        }
    }
}
