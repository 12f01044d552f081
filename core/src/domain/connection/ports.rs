use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    connection::{entities::Connection, value_objects::CreateConnectionInput},
    document::entities::Document,
};

pub trait ConnectionService: Send + Sync {
    fn get_connection(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Document, CoreError>> + Send;

    /// Opens a pending connection. A pair of users holds at most one
    /// connection, whichever side requested it.
    fn create_connection(
        &self,
        input: CreateConnectionInput,
    ) -> impl Future<Output = Result<Connection, CoreError>> + Send;
}
