pub mod catalog_service;

pub use catalog_service::{find_session, load_catalog, parse_catalog};
