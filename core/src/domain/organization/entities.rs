use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub owner: Uuid,
    #[serde(with = "crate::domain::common::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn new(
        name: String,
        description: Option<String>,
        website: Option<String>,
        owner: Uuid,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            description,
            website,
            owner,
            created_at: generate_timestamp(),
        }
    }
}
