use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::entities::Collection,
    listing::value_objects::{ListOptions, QueryParams, ResultEnvelope},
};

pub trait ListingService: Send + Sync {
    /// Translates query parameters into a filtered, searched, sorted and
    /// paginated listing of `collection`.
    fn list_documents(
        &self,
        collection: &'static Collection,
        options: &ListOptions,
        params: &QueryParams,
    ) -> impl Future<Output = Result<ResultEnvelope, CoreError>> + Send;
}
