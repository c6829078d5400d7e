// Presentation layer - Tenant override components
pub mod email_template;
pub mod search;
pub mod supplier_directory;
