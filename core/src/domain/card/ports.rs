use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    card::{entities::Card, value_objects::CreateCardInput},
    common::entities::app_errors::CoreError,
    document::entities::Document,
};

pub trait CardService: Send + Sync {
    fn get_card(&self, id: Uuid) -> impl Future<Output = Result<Document, CoreError>> + Send;

    fn create_card(
        &self,
        input: CreateCardInput,
    ) -> impl Future<Output = Result<Card, CoreError>> + Send;
}
