//! Row structs and create/update DTOs, one module per table.

pub mod academy_project;
pub mod admin;
pub mod category;
pub mod landing_section;
pub mod media;
pub mod product;
pub mod project;
pub mod site_setting;
pub mod tech_stack;
