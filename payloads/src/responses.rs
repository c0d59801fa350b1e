use crate::{
    CategoryId, FileId, LocationData, UserId, UserRole, null_as_default,
};
use serde::{Deserialize, Serialize};

/// The currently signed in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub login_id: String,
    pub nickname: String,
    /// Optional at signup on older accounts; `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub bio: Option<String>,
}

/// A user-owned grouping of resources.
///
/// Timestamps are the backend's zone-less local date-times and are kept as
/// text; they are only ever displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub public_id: Option<String>,
    pub category_title: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Metadata for an uploaded file. `url` is a presigned download link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    pub id: FileId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl FileResource {
    /// Name to show in lists: the display name, then the title, then the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(self.id.0.as_str())
    }
}

/// A user's stored location together with their contact details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    #[serde(flatten)]
    pub location: LocationData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
}

impl LocationResponse {
    /// Build the update body that keeps the contact details and replaces the
    /// coordinates.
    pub fn with_location(
        &self,
        location: LocationData,
    ) -> crate::requests::LocationUpdate {
        crate::requests::LocationUpdate {
            location,
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    /// Build the update body that keeps the coordinates and replaces the
    /// contact details.
    pub fn with_contact(
        &self,
        email: String,
        phone_number: String,
    ) -> crate::requests::LocationUpdate {
        crate::requests::LocationUpdate {
            location: self.location.clone(),
            email,
            phone_number,
        }
    }
}

impl From<crate::requests::LocationUpdate> for LocationResponse {
    fn from(update: crate::requests::LocationUpdate) -> Self {
        LocationResponse {
            location: update.location,
            email: update.email,
            phone_number: update.phone_number,
        }
    }
}

/// A category's intro post. Both fields are `null` when none was written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Introduce {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Introduce {
    /// The stored post, if the category has one.
    pub fn stored(self) -> Option<crate::requests::IntroduceRequest> {
        match (self.title, self.content) {
            (Some(title), Some(content)) => {
                Some(crate::requests::IntroduceRequest { title, content })
            }
            _ => None,
        }
    }
}
