pub mod application;
pub mod composition;
pub mod domain;
pub mod error;
pub mod infrastructure;
