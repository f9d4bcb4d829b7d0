pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod icons;
pub mod notifications;
pub mod table_filters;
