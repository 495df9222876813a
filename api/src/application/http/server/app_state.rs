use std::sync::Arc;

use souschef_core::application::SouschefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SouschefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SouschefService) -> Self {
        Self { args, service }
    }
}
