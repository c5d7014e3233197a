pub mod api_spec;

pub use api_spec::{EndpointDataStore, EndpointSet, InterfaceDocument};
