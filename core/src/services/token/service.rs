//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, TokenPair, TokenUse};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Issues and decodes signed tokens. Stateless: nothing is stored, validity
/// is recomputed on every decode.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates an access and refresh token pair for a login
    pub fn generate_tokens(&self, account: &Account) -> Result<TokenPair, TokenError> {
        let access = self.generate_access_token(account)?;
        let refresh = self.encode_jwt(&self.claims_for(account, TokenUse::Refresh))?;

        Ok(TokenPair {
            access,
            refresh,
            access_expires_in: self.config.access_token_expiry,
            refresh_expires_in: self.config.refresh_token_expiry,
        })
    }

    /// Generates an access token carrying the account's role and email
    pub fn generate_access_token(&self, account: &Account) -> Result<String, TokenError> {
        let claims = self
            .claims_for(account, TokenUse::Access)
            .with_email(account.email.clone());
        self.encode_jwt(&claims)
    }

    /// Generates the token embedded in an email verification link
    pub fn generate_email_verification_token(&self, account_id: Uuid) -> Result<String, TokenError> {
        self.encode_jwt(&self.base_claims(account_id, TokenUse::EmailVerification))
    }

    /// Decodes a token and checks it was issued for `expected_use`
    ///
    /// # Returns
    ///
    /// * `Err(TokenError::TokenExpired)` - signature valid, `exp` passed
    /// * `Err(TokenError::WrongTokenUse)` - valid token issued for something else
    /// * `Err(TokenError::TokenMalformed)` - any other failure
    pub fn decode(&self, token: &str, expected_use: TokenUse) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::TokenMalformed,
            }
        })?;

        let claims = token_data.claims;
        if claims.token_use != expected_use {
            tracing::warn!(
                expected = expected_use.as_str(),
                actual = claims.token_use.as_str(),
                event = "wrong_token_use",
                "Token presented for the wrong purpose"
            );
            return Err(TokenError::WrongTokenUse);
        }
        if claims.account_id().is_err() {
            return Err(TokenError::TokenMalformed);
        }

        Ok(claims)
    }

    /// Encodes claims into a JWT
    pub fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "Failed to sign token");
            TokenError::TokenGenerationFailed
        })
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }

    fn claims_for(&self, account: &Account, token_use: TokenUse) -> Claims {
        self.base_claims(account.id, token_use).with_role(account.role)
    }

    fn base_claims(&self, account_id: Uuid, token_use: TokenUse) -> Claims {
        let ttl = match token_use {
            TokenUse::Access => self.config.access_token_expiry,
            TokenUse::Refresh => self.config.refresh_token_expiry,
            TokenUse::EmailVerification => self.config.email_verification_expiry,
        };
        let mut claims = Claims::new(account_id, token_use, ttl);
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();
        claims
    }
}
