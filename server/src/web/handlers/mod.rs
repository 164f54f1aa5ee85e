// vantablack_server/src/web/handlers/mod.rs

// Declare handler modules
pub mod article_handlers;
pub mod resource_handlers;
