//! Breadcrumb builder

use crate::navigate::results::Breadcrumb;

pub const ROOT_LABEL: &str = "Home";

/// Builds the breadcrumb chain for `path`, always starting with the root.
pub fn build_breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut breadcrumbs = vec![Breadcrumb {
        name: ROOT_LABEL.to_string(),
        path: String::new(),
    }];

    let mut cumulative = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !cumulative.is_empty() {
            cumulative.push('/');
        }
        cumulative.push_str(segment);
        breadcrumbs.push(Breadcrumb {
            name: segment.to_string(),
            path: cumulative.clone(),
        });
    }

    breadcrumbs
}
