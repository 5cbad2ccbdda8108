//! HTTP handlers, one module per resource.

pub mod academy;
pub mod auth;
pub mod categories;
pub mod landing_sections;
pub mod media;
pub mod products;
pub mod projects;
pub mod site_settings;
pub mod tech_stacks;
