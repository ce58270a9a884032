//! Terminal client for a self-hosted tweet sentiment-analysis service:
//! analyze free text, or fetch a user's recent tweets with their labels.

pub mod api;
pub mod app;
pub mod config;
pub mod ui;
