//! DTOs for route table endpoints.

use serde::Serialize;

use crate::domain::entities::RouteDescriptor;

/// Route table listing.
#[derive(Debug, Serialize)]
pub struct RouteListResponse<'a> {
    pub count: usize,
    pub routes: &'a [RouteDescriptor],
}
