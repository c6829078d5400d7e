// Application layer - Bundle contracts and use cases
pub mod customization;
pub mod registry;
pub mod search_backend;
pub mod validation;
