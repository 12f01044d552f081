use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// A request from one user to exchange cards with another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: Uuid,
    pub requester: Uuid,
    pub recipient: Uuid,
    pub status: ConnectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(with = "crate::domain::common::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Connection {
    pub fn new(requester: Uuid, recipient: Uuid, message: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7(),
            requester,
            recipient,
            status: ConnectionStatus::Pending,
            message,
            created_at: generate_timestamp(),
        }
    }
}
