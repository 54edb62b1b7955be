use std::sync::Arc;

use crate::application::services::NavigationController;
use crate::domain::route_table::RouteTable;

#[derive(Clone)]
pub struct AppState {
    pub navigator: Arc<NavigationController>,
}

impl AppState {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self {
            navigator: Arc::new(NavigationController::new(table)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RouteTable::dashboard()))
    }
}
