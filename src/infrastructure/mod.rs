// Infrastructure layer - External dependencies and adapters
pub mod config_loader;
pub mod simulated_search;
