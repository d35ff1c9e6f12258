//! Catalog module.
//!
//! Contains the domain entities, their classification attributes, and the
//! read-only collections that hold them.

mod artifact;
mod attributes;
mod blog;
mod course;
mod curriculum;
mod library;
pub mod seed;
mod store;
mod storefront;
mod teacher;

pub use artifact::Artifact;
pub use attributes::{
    Access, Attribute, Availability, BlogCategory, CourseFormat, JewelryType, Level,
    LibraryFormat, MagicDirection, Material, ProgressStatus, Stone,
};
pub use blog::BlogPost;
pub use course::Course;
pub use curriculum::CurriculumCourse;
pub use library::LibraryItem;
pub use store::{Catalog, CatalogItem, ItemKind, KindLookup, PriceLookup};
pub use storefront::Storefront;
pub use teacher::Teacher;
