//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The ordered-collection
//! behavior shared by the content resources (append-to-end sort order,
//! atomic bulk reorder, publish toggling, filtered list views) lives in
//! [`ordered`] and is instantiated per resource via a `const` metadata
//! declaration.

pub mod ordered;

pub mod academy_project_repo;
pub mod admin_repo;
pub mod category_repo;
pub mod landing_section_repo;
pub mod media_repo;
pub mod product_repo;
pub mod project_repo;
pub mod site_setting_repo;
pub mod tech_stack_repo;

pub use academy_project_repo::AcademyProjectRepo;
pub use admin_repo::AdminRepo;
pub use category_repo::CategoryRepo;
pub use landing_section_repo::LandingSectionRepo;
pub use media_repo::MediaRepo;
pub use product_repo::ProductRepo;
pub use project_repo::ProjectRepo;
pub use site_setting_repo::SiteSettingRepo;
pub use tech_stack_repo::TechStackRepo;
