// Domain layer - Tenant configuration and view models
pub mod config;
pub mod data;
pub mod fragment;
