//! Business logic services

pub mod catalog_service;
pub mod target_service;

pub use catalog_service::CatalogService;
pub use target_service::TargetService;
