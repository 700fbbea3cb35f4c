//! Account service implementation

use std::sync::Arc;
use uuid::Uuid;

use hh_shared::utils::phone::{is_valid_phone, mask_phone_number};
use hh_shared::utils::validation::{is_valid_email, validate_password_strength};

use crate::domain::entities::account::{Account, AccountChanges, NewAccount, Role};
use crate::domain::entities::token::{TokenPair, TokenUse};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::token::TokenService;

use super::config::AccountServiceConfig;
use super::traits::EmailServiceTrait;
use super::types::{PasswordChange, Registration};

/// Account lifecycle for customers and service providers
pub struct AccountService<R, E>
where
    R: AccountRepository + ?Sized,
    E: EmailServiceTrait + ?Sized,
{
    accounts: Arc<R>,
    email_service: Arc<E>,
    token_service: Arc<TokenService>,
    config: AccountServiceConfig,
}

impl<R, E> AccountService<R, E>
where
    R: AccountRepository + ?Sized,
    E: EmailServiceTrait + ?Sized,
{
    pub fn new(
        accounts: Arc<R>,
        email_service: Arc<E>,
        token_service: Arc<TokenService>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            accounts,
            email_service,
            token_service,
            config,
        }
    }

    /// Register a new account and mail it an email verification link.
    ///
    /// A failed email is logged but does not fail the registration; the link
    /// is returned to the caller either way.
    pub async fn register(&self, input: NewAccount, role: Role) -> DomainResult<Registration> {
        if !is_valid_email(&input.email) {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
            }
            .into());
        }
        if !is_valid_phone(&input.phone_number) {
            return Err(ValidationError::InvalidFormat {
                field: "phone_number".to_string(),
            }
            .into());
        }
        validate_password_strength(&input.password).map_err(|message| AuthError::WeakPassword {
            message: message.to_string(),
        })?;

        if self.accounts.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::Conflict {
                message: "An account with this email already exists".to_string(),
            });
        }
        if self.accounts.exists_by_phone(&input.phone_number).await? {
            return Err(DomainError::Conflict {
                message: "An account with this phone number already exists".to_string(),
            });
        }

        let password_hash = self.hash_password(&input.password)?;
        let account = self
            .accounts
            .create(Account::new(input, role, password_hash))
            .await?;

        let token = self
            .token_service
            .generate_email_verification_token(account.id)?;
        let verification_link = self.config.email_verification_link(&token);

        let body = format!(
            "<h2>Hi, <small>{}</small></h2>\n<h4>Use the link below to verify your email.</h4>\n<p>{}</p>",
            account.first_name, verification_link
        );
        if let Err(e) = self
            .email_service
            .send_email(&account.email, "Verify your email", &body)
            .await
        {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                event = "verification_email_failed",
                "Failed to send verification email"
            );
        }

        tracing::info!(
            account_id = %account.id,
            role = role.as_str(),
            phone = %mask_phone_number(&account.phone_number),
            event = "account_registered",
            "New account registered"
        );

        Ok(Registration {
            account,
            verification_link,
        })
    }

    /// Every account with the given role; an empty result is `NotFound`
    pub async fn list_by_role(&self, role: Role) -> DomainResult<Vec<Account>> {
        let accounts = self.accounts.list_by_role(role).await?;
        if accounts.is_empty() {
            return Err(DomainError::not_found(role.as_str()));
        }
        Ok(accounts)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound.into())
    }

    /// Apply a partial profile update; only the owner may edit
    pub async fn update_profile(
        &self,
        actor: Uuid,
        id: Uuid,
        changes: AccountChanges,
    ) -> DomainResult<Account> {
        let mut account = self.get(id).await?;
        ensure_owner(actor, id)?;

        account.apply(changes);
        self.accounts.update(account).await
    }

    /// Delete an account; only the owner may delete
    pub async fn delete(&self, actor: Uuid, id: Uuid) -> DomainResult<()> {
        self.get(id).await?;
        ensure_owner(actor, id)?;

        if !self.accounts.delete(id).await? {
            return Err(AuthError::AccountNotFound.into());
        }
        tracing::info!(account_id = %id, event = "account_deleted", "Account deleted");
        Ok(())
    }

    /// Check credentials and issue a token pair if the account has the expected role
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        expected_role: Role,
    ) -> DomainResult<TokenPair> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        if !self.verify_password(password, &account.password_hash) {
            tracing::warn!(
                account_id = %account.id,
                event = "login_failed",
                "Login attempt with wrong password"
            );
            return Err(AuthError::AuthenticationFailed.into());
        }
        if account.role != expected_role {
            return Err(AuthError::WrongRole {
                expected: expected_role,
            }
            .into());
        }

        let tokens = self.token_service.generate_tokens(&account)?;
        tracing::info!(account_id = %account.id, event = "login_success", "Account logged in");
        Ok(tokens)
    }

    /// Exchange a refresh token for a new access token
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self.token_service.decode(refresh_token, TokenUse::Refresh)?;
        let account_id = claims
            .account_id()
            .map_err(|_| DomainError::Unauthorized)?;

        // A deleted account cannot refresh
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        Ok(self.token_service.generate_access_token(&account)?)
    }

    /// Flip the email-verified flag for the account named in a verification
    /// token. Verifying twice is not an error.
    pub async fn verify_email(&self, token: &str) -> DomainResult<Account> {
        let claims = self
            .token_service
            .decode(token, TokenUse::EmailVerification)?;
        let account_id = claims
            .account_id()
            .map_err(|_| DomainError::from(TokenError::TokenMalformed))?;

        let mut account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account"))?;

        if account.email_verified {
            return Ok(account);
        }

        account.verify_email();
        let account = self.accounts.update(account).await?;
        tracing::info!(account_id = %account.id, event = "email_verified", "Email address verified");
        Ok(account)
    }

    /// Change the password of `target`, which must be the caller's own account
    pub async fn change_password(
        &self,
        actor: Uuid,
        target: Uuid,
        change: PasswordChange,
    ) -> DomainResult<()> {
        ensure_owner(actor, target)?;
        let mut account = self.get(target).await?;

        if !self.verify_password(&change.old_password, &account.password_hash) {
            return Err(AuthError::IncorrectPassword.into());
        }
        check_new_password(&change.password, &change.password_confirmation)?;

        account.set_password_hash(self.hash_password(&change.password)?);
        self.accounts.update(account).await?;
        tracing::info!(account_id = %target, event = "password_changed", "Password changed");
        Ok(())
    }

    /// Mail a password reset link to a registered address and return the link
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<String> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidUserEmail)?;

        let link = self.config.password_reset_link();
        let body = format!(
            "<h2>Hi, <small>{}</small></h2>\n<h4>Use the link below to reset your password.</h4>\n<p>{}</p>",
            account.first_name, link
        );
        if let Err(e) = self
            .email_service
            .send_email(&account.email, "Reset your password", &body)
            .await
        {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                event = "reset_email_failed",
                "Failed to send password reset email"
            );
        }

        Ok(link)
    }

    /// Set a new password for the account registered under `email`
    pub async fn reset_password(
        &self,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> DomainResult<()> {
        check_new_password(password, password_confirmation)?;

        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::Validation {
                message: AuthError::InvalidUserEmail.to_string(),
            })?;

        account.set_password_hash(self.hash_password(password)?);
        self.accounts.update(account).await?;
        tracing::info!(event = "password_reset", "Password reset");
        Ok(())
    }

    fn hash_password(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

fn ensure_owner(actor: Uuid, target: Uuid) -> DomainResult<()> {
    if actor != target {
        return Err(AuthError::InsufficientPermissions.into());
    }
    Ok(())
}

/// Strength first, then confirmation
fn check_new_password(password: &str, confirmation: &str) -> DomainResult<()> {
    validate_password_strength(password).map_err(|message| AuthError::WeakPassword {
        message: message.to_string(),
    })?;
    if password != confirmation {
        return Err(AuthError::PasswordMismatch.into());
    }
    Ok(())
}
