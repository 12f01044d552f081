use crate::domain::{
    document::{
        entities::{Collection, Reference},
        value_objects::PopulateSpec,
    },
    listing::value_objects::ListOptions,
    organization::ORGANIZATIONS,
};

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub static USERS: Collection = Collection {
    name: "users",
    hidden_fields: &["password"],
    references: &[Reference {
        path: "organization",
        collection: &ORGANIZATIONS,
    }],
};

pub fn list_options() -> ListOptions {
    ListOptions::new()
        .searchable(["name", "email"])
        .populate(PopulateSpec::detailed("organization", "name"))
}
