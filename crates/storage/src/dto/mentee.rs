use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Mentee;

pub const DEFAULT_STATUS: &str = "Active";
pub const DEFAULT_TYPE: &str = "InPerson";
pub const ACCEPTED_STATUS: &str = "accepted";

/// Request payload for registering a new mentee
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMenteeRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub email_address: Option<String>,

    #[validate(length(min = 1, max = 255, message = "creator_id is required"))]
    pub creator_id: String,

    #[serde(rename = "type", default = "default_type")]
    #[validate(length(min = 1, max = 50))]
    pub mentee_type: String,

    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = 50))]
    pub status: String,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl CreateMenteeRequest {
    /// The email to check for uniqueness, ignoring blank values.
    pub fn email(&self) -> Option<&str> {
        self.email_address.as_deref().filter(|e| !e.is_empty())
    }
}

/// Partial update of a mentee.
///
/// Only the fields listed here can be changed by clients; identifiers, the
/// invite key and the linked user are not patchable. Unknown keys are ignored.
/// For nullable fields an explicit `null` clears the value while an absent key
/// leaves it untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMenteeRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255))]
    #[schema(value_type = Option<String>)]
    pub email_address: Option<Option<String>>,

    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub mentee_type: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 1000))]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AcceptInvitationRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AcceptInvitationResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenteeResponse {
    pub id: String,
    pub name: String,
    pub email_address: Option<String>,
    pub creator_id: Option<String>,
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub mentee_type: String,
    pub status: String,
    pub notes: Option<String>,
    pub invite_key: String,
    pub created: NaiveDateTime,
}

impl From<Mentee> for MenteeResponse {
    fn from(mentee: Mentee) -> Self {
        Self {
            id: mentee.id,
            name: mentee.name,
            email_address: mentee.email_address,
            creator_id: mentee.creator_id,
            user_id: mentee.user_id,
            mentee_type: mentee.mentee_type,
            status: mentee.status,
            notes: mentee.notes,
            invite_key: mentee.invite_key,
            created: mentee.created,
        }
    }
}
