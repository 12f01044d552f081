use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use cardfolio_core::domain::{
    document::entities::Collection,
    listing::{ports::ListingService, value_objects::ListOptions},
};
use tracing::debug;

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// What one list endpoint lists, and how
#[derive(Clone)]
pub struct ListingContext {
    pub state: AppState,
    pub collection: &'static Collection,
    pub options: Arc<ListOptions>,
}

/// Binds a collection and its options to the application state. The server's
/// `--max-page-size` caps the page size of every listing.
pub fn listing(
    state: &AppState,
    collection: &'static Collection,
    options: ListOptions,
) -> ListingContext {
    let options = options.max_limit(state.args.server.max_page_size);

    ListingContext {
        state: state.clone(),
        collection,
        options: Arc::new(options),
    }
}

/// Runs the listing for the request's query string and hands the resulting
/// `ResultEnvelope` to the handler as a request extension. On failure the
/// handler is never reached.
pub async fn advanced_results(
    State(context): State<ListingContext>,
    QueryParamsExtractor(params): QueryParamsExtractor,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let envelope = context
        .state
        .service
        .list_documents(context.collection, &context.options, &params)
        .await
        .map_err(ApiError::from)?;

    debug!(
        collection = context.collection.name,
        count = envelope.count,
        "Attached result envelope"
    );
    req.extensions_mut().insert(envelope);

    Ok(next.run(req).await)
}
