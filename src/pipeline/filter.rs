use tracing::{info, warn};

use crate::models::{EndpointSet, InterfaceDocument};

const GET_ALL_MARKER: &str = "/get/all";
const PAGED_MARKER: &str = "/by_page";

/// True for "list all" paths that are not paginated.
pub fn is_get_all_path(path: &str) -> bool {
    path.contains(GET_ALL_MARKER) && !path.contains(PAGED_MARKER)
}

/// Selects the "list all" endpoints from an interface description.
///
/// A document without `paths` yields an empty set; the caller keeps going.
pub fn extract_get_all_endpoints(document: InterfaceDocument) -> EndpointSet {
    let mut endpoints = EndpointSet::default();

    let Some(paths) = document.paths else {
        warn!("No paths found in interface description");
        return endpoints;
    };

    for (path, description) in paths {
        if is_get_all_path(&path) {
            endpoints.insert(path, description);
        }
    }

    info!(count = endpoints.len(), "GET ALL endpoints loaded");
    endpoints
}
