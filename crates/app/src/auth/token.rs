//! Bearer tokens for storefront accounts.
//!
//! A token reads `bo_v1_<token uuid>.<secret hex>`. The UUID names the stored
//! row; the 32 secret bytes only ever exist on the visitor's side. Storage
//! keeps a SHA-256 digest of the secret bound to the owning user, so a row
//! copied onto another account no longer verifies.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    str::FromStr,
};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::{Zeroize, Zeroizing};

use crate::{
    auth::models::{ApiTokenMetadata, UserUuid},
    uuids::TypedUuid,
};

/// API Token UUID
pub type ApiTokenUuid = TypedUuid<ApiTokenMetadata>;

const TOKEN_PREFIX: &str = "bo_v1_";
const SECRET_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenFormatError {
    #[error("bearer token is not a box office token")]
    InvalidFormat,

    #[error("bearer token secret is not {SECRET_BYTES} hex-encoded bytes")]
    InvalidSecret,
}

struct TokenSecret([u8; SECRET_BYTES]);

impl TokenSecret {
    fn generate() -> Self {
        let mut bytes = [0_u8; SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self(bytes)
    }

    fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0))
    }
}

impl Drop for TokenSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// A bearer token as presented by, or issued to, a visitor.
pub struct BearerToken {
    uuid: ApiTokenUuid,
    secret: TokenSecret,
}

impl BearerToken {
    /// Mint a token with a fresh time-ordered UUID and random secret.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            uuid: ApiTokenUuid::from_uuid(Uuid::now_v7()),
            secret: TokenSecret::generate(),
        }
    }

    #[must_use]
    pub const fn uuid(&self) -> ApiTokenUuid {
        self.uuid
    }

    /// The string handed to the visitor. Shown once, never stored.
    #[must_use]
    pub fn reveal(&self) -> String {
        format!(
            "{TOKEN_PREFIX}{}.{}",
            self.uuid.into_uuid().simple(),
            self.secret.to_hex().as_str()
        )
    }

    /// Digest stored for this token when it is issued to `user`.
    #[must_use]
    pub fn verifier(&self, user: UserUuid) -> String {
        let input = Zeroizing::new(format!(
            "{}:{}:{}",
            self.uuid.into_uuid().simple(),
            user.into_uuid().simple(),
            self.secret.to_hex().as_str()
        ));

        hex::encode(Sha256::digest(input.as_bytes()))
    }

    /// Check the token against the digest stored for `user`.
    ///
    /// The comparison does not stop at the first differing byte.
    #[must_use]
    pub fn verify(&self, user: UserUuid, stored: &str) -> bool {
        let presented = self.verifier(user);

        presented.len() == stored.len()
            && presented
                .bytes()
                .zip(stored.bytes())
                .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
                == 0
    }
}

impl Debug for BearerToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BearerToken")
            .field("uuid", &self.uuid)
            .finish_non_exhaustive()
    }
}

impl FromStr for BearerToken {
    type Err = TokenFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (uuid, secret_hex) = value
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|rest| rest.split_once('.'))
            .ok_or(TokenFormatError::InvalidFormat)?;

        let uuid = Uuid::try_parse(uuid).map_err(|_error| TokenFormatError::InvalidFormat)?;

        let mut secret = TokenSecret([0_u8; SECRET_BYTES]);

        hex::decode_to_slice(secret_hex, &mut secret.0)
            .map_err(|_error| TokenFormatError::InvalidSecret)?;

        Ok(Self {
            uuid: ApiTokenUuid::from_uuid(uuid),
            secret,
        })
    }
}
