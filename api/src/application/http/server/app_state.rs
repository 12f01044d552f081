use std::sync::Arc;

use cardfolio_core::application::CardfolioService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CardfolioService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CardfolioService) -> Self {
        Self { args, service }
    }
}
