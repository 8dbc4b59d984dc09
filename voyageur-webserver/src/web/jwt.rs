//! Verification of the bearer tokens issued by the identity provider.

use anyhow::Result;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user id
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiry time as Unix timestamp
    pub exp: i64,
}

pub struct JwtState {
    #[cfg(test)]
    encoding_key: jsonwebtoken::EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtState {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Audiences differ between providers
        validation.validate_aud = false;
        Self {
            #[cfg(test)]
            encoding_key: jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token signed with the shared secret, valid for one hour.
    ///
    /// Tokens are issued by the identity provider, the server never signs any.
    #[cfg(test)]
    pub fn generate_token(&self, sub: &str, email: Option<&str>) -> Result<String> {
        use jsonwebtoken::{encode, Header};
        use time::{Duration, OffsetDateTime};

        let exp = (OffsetDateTime::now_utc() + Duration::hours(1)).unix_timestamp();
        let claims = Claims {
            sub: sub.to_owned(),
            email: email.map(ToOwned::to_owned),
            exp,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}
