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

pub static CONNECTIONS: Collection = Collection {
    name: "connections",
    hidden_fields: &[],
    references: &[
        Reference {
            path: "requester",
            collection: &USERS,
        },
        Reference {
            path: "recipient",
            collection: &USERS,
        },
    ],
};

pub fn list_options() -> ListOptions {
    ListOptions::new()
        .populate(PopulateSpec::detailed("requester", "name,email"))
        .populate(PopulateSpec::detailed("recipient", "name,email"))
}
