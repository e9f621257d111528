use std::sync::Arc;

use libdevlog::LogFetcher;

use crate::templates::Templates;

/// Shared by every worker. Built once at startup.
#[derive(Clone)]
pub struct DevLogAppData {
    pub fetcher: Arc<LogFetcher>,
    pub templates: Arc<Templates>,
}

impl DevLogAppData {
    pub fn new(fetcher: LogFetcher, templates: Templates) -> DevLogAppData {
        DevLogAppData {
            fetcher: Arc::new(fetcher),
            templates: Arc::new(templates),
        }
    }
}
