pub mod catalog_service;
pub mod labels;
pub mod modules;
pub mod nested_json;
pub mod sanitizer;

pub use catalog_service::CatalogService;
