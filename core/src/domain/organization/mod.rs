use crate::domain::{
    document::{
        entities::{Collection, Reference},
        value_objects::PopulateSpec,
    },
    listing::value_objects::ListOptions,
    user::USERS,
};

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub static ORGANIZATIONS: Collection = Collection {
    name: "organizations",
    hidden_fields: &[],
    references: &[Reference {
        path: "owner",
        collection: &USERS,
    }],
};

pub fn list_options() -> ListOptions {
    ListOptions::new()
        .searchable(["name", "description"])
        .populate(PopulateSpec::detailed("owner", "name,email"))
}
