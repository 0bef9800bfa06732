//! Navigate module
//!
//! Read side of the media store: browsing a folder with pagination, search
//! and breadcrumbs.

pub mod breadcrumbs;
pub mod operations;
pub mod pagination;
pub mod results;

pub use operations::browse;
pub use pagination::PageRequest;
pub use results::{Breadcrumb, PageResult};
