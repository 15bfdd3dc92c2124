pub mod api;
pub mod config;
pub mod gemini_client;
pub mod http_client;
pub mod services;
