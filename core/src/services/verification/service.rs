//! Phone verification flow

use std::sync::Arc;
use uuid::Uuid;

use hh_shared::utils::phone::{is_valid_phone, mask_phone_number, phone_numbers_match};

use crate::domain::entities::account::Account;
use crate::domain::entities::pending_verification::PendingVerification;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::AccountRepository;

use super::config::VerificationServiceConfig;
use super::traits::{SessionStore, SmsServiceTrait};
use super::types::VerificationOutcome;

/// What the caller is trying to prove
enum Intent {
    /// The number already on the account
    ConfirmCurrent,
    /// A number that will replace the one on the account
    Change,
}

/// Challenge/response gate in front of phone number claims.
///
/// Per session the flow has two states: no pending code, or one code issued.
/// A request without a pending code issues one. Any submission while a code is
/// pending consumes it, whether it matches or not. There is no retry counter,
/// expiry or rate limit.
pub struct PhoneVerificationService<R, S, T>
where
    R: AccountRepository + ?Sized,
    S: SmsServiceTrait + ?Sized,
    T: SessionStore + ?Sized,
{
    accounts: Arc<R>,
    sms_service: Arc<S>,
    sessions: Arc<T>,
    config: VerificationServiceConfig,
}

impl<R, S, T> PhoneVerificationService<R, S, T>
where
    R: AccountRepository + ?Sized,
    S: SmsServiceTrait + ?Sized,
    T: SessionStore + ?Sized,
{
    pub fn new(
        accounts: Arc<R>,
        sms_service: Arc<S>,
        sessions: Arc<T>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            accounts,
            sms_service,
            sessions,
            config,
        }
    }

    /// Verify the phone number already stored on the account.
    ///
    /// # Arguments
    ///
    /// * `session_id` - Identifies the requester's session
    /// * `account_id` - Authenticated account
    /// * `otp` - Submitted code, if any
    pub async fn confirm_current_number(
        &self,
        session_id: &str,
        account_id: Uuid,
        otp: Option<&str>,
    ) -> DomainResult<VerificationOutcome> {
        let account = self.load_account(account_id).await?;

        if account.phone_verified {
            tracing::info!(
                account_id = %account_id,
                event = "phone_already_verified",
                "Phone verification requested for an already verified number"
            );
            return Ok(VerificationOutcome::AlreadyVerified);
        }

        let target = account.phone_number.clone();
        self.run(session_id, account, &target, otp, Intent::ConfirmCurrent)
            .await
    }

    /// Replace the account's phone number with `number` once it is proven.
    ///
    /// # Arguments
    ///
    /// * `session_id` - Identifies the requester's session
    /// * `account_id` - Authenticated account
    /// * `number` - Candidate new number
    /// * `otp` - Submitted code, if any
    ///
    /// # Errors
    ///
    /// `ValidationError::InvalidFormat` for a number registration would refuse;
    /// the session is not read in that case.
    pub async fn change_number(
        &self,
        session_id: &str,
        account_id: Uuid,
        number: &str,
        otp: Option<&str>,
    ) -> DomainResult<VerificationOutcome> {
        let number = number.trim();

        if !is_valid_phone(number) {
            return Err(ValidationError::InvalidFormat {
                field: "number".to_string(),
            }
            .into());
        }

        // Checked before the session is read so a taken number never touches it
        if self.accounts.exists_by_phone(number).await? {
            tracing::info!(
                account_id = %account_id,
                phone = %mask_phone_number(number),
                event = "phone_already_exists",
                "Phone change requested for a number already in use"
            );
            return Ok(VerificationOutcome::AlreadyExists);
        }

        let account = self.load_account(account_id).await?;
        self.run(session_id, account, number, otp, Intent::Change)
            .await
    }

    async fn run(
        &self,
        session_id: &str,
        mut account: Account,
        target: &str,
        otp: Option<&str>,
        intent: Intent,
    ) -> DomainResult<VerificationOutcome> {
        let pending = match self.sessions.get(session_id).await? {
            Some(pending) => pending,
            None => return self.issue(session_id, target).await,
        };

        // Any submission consumes the pending code
        self.sessions.clear(session_id).await?;

        let otp = match otp.filter(|code| !code.is_empty()) {
            Some(code) => code,
            None => {
                tracing::warn!(
                    account_id = %account.id,
                    event = "otp_missing",
                    "Code pending but none submitted, pending verification cleared"
                );
                return Ok(VerificationOutcome::Invalid);
            }
        };

        // The code only proves the number it was sent to
        if !pending.matches(otp) || !phone_numbers_match(&pending.target, target) {
            tracing::warn!(
                account_id = %account.id,
                phone = %mask_phone_number(&pending.target),
                event = "otp_incorrect",
                "Submitted code did not match, pending verification cleared"
            );
            return Ok(VerificationOutcome::Incorrect);
        }

        match intent {
            Intent::ConfirmCurrent => account.verify_phone(),
            Intent::Change => account.change_phone(pending.target.clone()),
        }
        let account = self.accounts.update(account).await?;

        tracing::info!(
            account_id = %account.id,
            phone = %mask_phone_number(&account.phone_number),
            event = "otp_verified_success",
            "Phone number verified"
        );
        Ok(VerificationOutcome::Success)
    }

    /// Generate a code, store it in the session and send it
    async fn issue(&self, session_id: &str, target: &str) -> DomainResult<VerificationOutcome> {
        let pending = PendingVerification::issue(target);
        let body = self.config.render(&pending.code);

        self.sessions.set(session_id, pending).await?;
        tracing::info!(
            phone = %mask_phone_number(target),
            event = "otp_generated",
            "Generated new verification code"
        );

        match self.sms_service.send_sms(target, &body).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone_number(target),
                    message_id = %message_id,
                    event = "otp_sent",
                    "Verification code sent"
                );
                Ok(VerificationOutcome::Sent)
            }
            Err(e) => {
                // A code nobody received must not stay pending
                self.sessions.clear(session_id).await?;
                tracing::error!(
                    phone = %mask_phone_number(target),
                    error = %e,
                    event = "otp_send_failed",
                    "Failed to send verification code"
                );
                Ok(VerificationOutcome::SendError)
            }
        }
    }

    async fn load_account(&self, account_id: Uuid) -> DomainResult<Account> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account"))
    }
}
