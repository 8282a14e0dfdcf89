//! Layout core for the interactive skills cloud.
//!
//! Skills are spread over layered golden-angle ellipses around the container
//! center and pushed away from the pointer. Everything here is a pure function
//! of the visible list, the pointer and the container size; the `wasm` module
//! wires it to the browser.

pub mod catalog;
pub mod cloud;
pub mod error;
pub mod filter;
pub mod layout;
pub mod output;
pub mod pointer;
mod wasm;

pub use catalog::{Catalog, Category, Level, Skill};
pub use cloud::{render_once, SkillCloud};
pub use error::CloudError;
pub use filter::CategoryFilter;
pub use layout::{layout_cloud, place_tag, LayoutConfig, SizeF, TagPlacement, TagTransform};
pub use output::CloudOutput;
pub use pointer::{PointF, PointerLease, PointerState, SharedPointer};
