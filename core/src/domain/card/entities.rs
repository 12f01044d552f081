use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    card::value_objects::CreateCardInput,
    common::{generate_timestamp, generate_uuid_v7},
};

/// A digital business card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub owner: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_public: bool,
    #[serde(with = "crate::domain::common::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn new(input: CreateCardInput) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in input.tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self {
            id: generate_uuid_v7(),
            owner: input.owner,
            organization: input.organization,
            name: input.name.trim().to_string(),
            title: input.title,
            company: input.company,
            email: input.email.map(|email| email.trim().to_lowercase()),
            phone: input.phone,
            website: input.website,
            address: input.address,
            tags,
            is_public: input.is_public,
            created_at: generate_timestamp(),
        }
    }
}
