pub mod models;
pub mod presentation;
