use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mentee {
    pub id: String,
    pub creator_id: Option<String>,
    pub user_id: Option<String>,
    pub name: String,
    pub email_address: Option<String>,
    pub invite_key: String,
    pub status: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub mentee_type: String,
    pub notes: Option<String>,
    pub created: chrono::NaiveDateTime,
}
