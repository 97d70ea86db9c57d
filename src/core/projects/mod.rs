// Core projects module - lists Azure DevOps projects through injected ports.

pub mod project_config;
pub mod project_models;
pub mod project_service;

pub use project_config::*;
pub use project_models::*;
pub use project_service::*;
