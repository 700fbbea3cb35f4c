use serde::{Deserialize, Deserializer, Serialize};

/// Login body. Fields are optional so a missing one gets the
/// "Please enter..." message instead of a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both credentials, when present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailQuery {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailResponse {
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyPhoneRequest {
    #[serde(default, deserialize_with = "code_as_string")]
    pub otp: Option<String>,
}

impl VerifyPhoneRequest {
    /// Parse the raw body; an empty body reads as `{}`
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePhoneRequest {
    #[serde(default, deserialize_with = "code_as_string")]
    pub otp: Option<String>,
    pub number: String,
}

/// Clients send the code either as `"123456"` or as `123456`
#[derive(Deserialize)]
#[serde(untagged)]
enum Code {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn code_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<Code>::deserialize(deserializer)?;
    Ok(code.map(|code| match code {
        Code::Text(text) => text,
        Code::Unsigned(n) => n.to_string(),
        Code::Signed(n) => n.to_string(),
    }))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordQuery {
    pub user_id: uuid::Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetEmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetEmailResponse {
    pub message: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub password: String,
    pub password2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_credentials_require_both_fields() {
        let full: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.co","password":"x"}"#).unwrap();
        assert_eq!(full.credentials(), Some(("a@b.co", "x")));

        let missing: LoginRequest = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(missing.credentials(), None);

        let empty: LoginRequest =
            serde_json::from_str(r#"{"email":"","password":"x"}"#).unwrap();
        assert_eq!(empty.credentials(), None);
    }

    #[test]
    fn test_phone_code_accepts_string_or_number() {
        let text = VerifyPhoneRequest::from_body(br#"{"otp":"012345"}"#).unwrap();
        assert_eq!(text.otp.as_deref(), Some("012345"));

        let number = VerifyPhoneRequest::from_body(br#"{"otp":665719}"#).unwrap();
        assert_eq!(number.otp.as_deref(), Some("665719"));

        let update: UpdatePhoneRequest =
            serde_json::from_str(r#"{"otp":123456,"number":"0901-000-0001"}"#).unwrap();
        assert_eq!(update.otp.as_deref(), Some("123456"));

        let null = VerifyPhoneRequest::from_body(br#"{"otp":null}"#).unwrap();
        assert_eq!(null.otp, None);
    }

    #[test]
    fn test_phone_body_may_be_empty_but_not_malformed() {
        assert_eq!(VerifyPhoneRequest::from_body(b"").unwrap().otp, None);
        assert_eq!(VerifyPhoneRequest::from_body(b" \n").unwrap().otp, None);
        assert_eq!(VerifyPhoneRequest::from_body(b"{}").unwrap().otp, None);

        assert!(VerifyPhoneRequest::from_body(b"{\"otp\":").is_err());
        assert!(VerifyPhoneRequest::from_body(br#"{"otp":[1,2]}"#).is_err());
        assert!(VerifyPhoneRequest::from_body(b"otp=123456").is_err());
    }
}
