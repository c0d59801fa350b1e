use crate::LocationData;
use serde::{Deserialize, Serialize};

pub const PASSWORD_MIN_LEN: usize = 10;
pub const CATEGORY_TITLE_MAX_LEN: usize = 100;

/// Characters that count as "special" for password complexity.
const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub login_id: String,
    pub password: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub category_title: String,
}

/// A category's intro post, sent on both create and update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntroduceRequest {
    pub title: String,
    pub content: String,
}

/// Body of the location PUT. The backend stores contact details alongside
/// the coordinates, so every update carries all of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    #[serde(flatten)]
    pub location: LocationData,
    pub email: String,
    pub phone_number: String,
}

/// A file to upload into a category.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub title: String,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

/// Validation result for passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidation {
    Valid,
    TooShort,
    TooFewCharTypes,
    TooShortAndTooFewCharTypes,
}

impl PasswordValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid => "유효한 비밀번호입니다.",
            Self::TooShort => "비밀번호는 10자 이상이어야 합니다.",
            Self::TooFewCharTypes => {
                "비밀번호는 영문, 숫자, 특수문자 중 2종류 이상이어야 합니다."
            }
            Self::TooShortAndTooFewCharTypes => {
                "비밀번호는 10자 이상, 영문, 숫자, 특수문자 중 2종류 이상이어야 합니다."
            }
        }
    }
}

/// Validate a password.
///
/// Rules (shared with the backend):
/// - at least 10 characters
/// - at least two of: ASCII letters, digits, special characters
pub fn validate_password(password: &str) -> PasswordValidation {
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special =
        password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));
    let char_types = [has_letter, has_digit, has_special]
        .into_iter()
        .filter(|present| *present)
        .count();
    let enough_types = char_types >= 2;

    match (long_enough, enough_types) {
        (true, true) => PasswordValidation::Valid,
        (false, true) => PasswordValidation::TooShort,
        (true, false) => PasswordValidation::TooFewCharTypes,
        (false, false) => PasswordValidation::TooShortAndTooFewCharTypes,
    }
}

/// Returns an error message when the confirmation does not match, or None
/// when it matches or has not been typed yet.
pub fn password_confirmation_error(
    password: &str,
    confirmation: &str,
) -> Option<&'static str> {
    if confirmation.is_empty() || password == confirmation {
        None
    } else {
        Some("비밀번호가 일치하지 않습니다.")
    }
}

/// Validate a category title, returning the trimmed title.
pub fn validate_category_title(title: &str) -> Result<String, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("카테고리 이름을 입력해주세요.");
    }
    if title.chars().count() > CATEGORY_TITLE_MAX_LEN {
        return Err("카테고리 이름은 100자 이하여야 합니다.");
    }
    Ok(title.to_string())
}

/// Validation result for a file about to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadValidation {
    Valid,
    TooLarge,
    DisallowedType,
}

impl UploadValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooLarge => Some("파일 크기는 10MB 이하여야 합니다."),
            Self::DisallowedType => Some("허용되지 않는 파일 형식입니다."),
        }
    }
}

/// Validate an upload against the size limit and an optional MIME allow-list.
/// An empty allow-list accepts every type; entries match as substrings, so
/// "image" admits "image/png".
pub fn validate_upload(
    size: usize,
    mime_type: &str,
    allowed_types: &[&str],
) -> UploadValidation {
    if size > crate::MAX_UPLOAD_SIZE {
        return UploadValidation::TooLarge;
    }
    if !allowed_types.is_empty()
        && !allowed_types.iter().any(|t| mime_type.contains(t))
    {
        return UploadValidation::DisallowedType;
    }
    UploadValidation::Valid
}

/// Replace everything outside `[A-Za-z0-9._-]` with an underscore.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
