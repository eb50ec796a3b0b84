//! Auth data models.

use jiff::Timestamp;

use crate::{
    auth::{ApiTokenUuid, BearerToken},
    uuids::TypedUuid,
};

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// A storefront visitor with an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uuid: UserUuid,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// New User Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
}

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    pub user_uuid: UserUuid,

    /// Hex SHA-256 verifier, see [`BearerToken::verifier`].
    pub token_hash: String,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: ApiTokenUuid,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub uuid: ApiTokenUuid,
    pub user_uuid: UserUuid,
    pub token_hash: String,
    pub expires_at: Option<Timestamp>,
}

/// A freshly issued token. `token` is the only copy of the secret.
#[derive(Debug)]
pub struct IssuedApiToken {
    pub token: BearerToken,
    pub metadata: ApiTokenMetadata,
}
