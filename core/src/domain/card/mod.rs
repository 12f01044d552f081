use crate::domain::{
    document::{
        entities::{Collection, Reference},
        value_objects::PopulateSpec,
    },
    listing::value_objects::ListOptions,
    organization::ORGANIZATIONS,
    user::USERS,
};

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub static CARDS: Collection = Collection {
    name: "cards",
    hidden_fields: &[],
    references: &[
        Reference {
            path: "owner",
            collection: &USERS,
        },
        Reference {
            path: "organization",
            collection: &ORGANIZATIONS,
        },
    ],
};

pub fn list_options() -> ListOptions {
    ListOptions::new()
        .searchable(["name", "title", "company", "email", "tags"])
        .populate(PopulateSpec::detailed("owner", "name,email"))
        .populate(PopulateSpec::detailed("organization", "name"))
}
