//! Pagination and search over listed entries
//!
//! Search narrows files only; folders are always returned whole and
//! unpaginated.

use crate::storage::results::{FileEntry, FolderEntry};

pub const DEFAULT_PAGE: usize = 1;

/// Anything with a display name that listings sort by.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for FileEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for FolderEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Normalized browse parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Fills in defaults; zero and empty values count as absent.
    pub fn new(
        search: Option<String>,
        page: Option<usize>,
        limit: Option<usize>,
        default_limit: usize,
    ) -> Self {
        Self {
            search: search.filter(|term| !term.is_empty()),
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            limit: limit.filter(|l| *l > 0).unwrap_or(default_limit.max(1)),
        }
    }
}

/// One page of items plus the totals it was cut from
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Case-insensitive substring match; no term matches everything.
pub fn matches_search(name: &str, term: Option<&str>) -> bool {
    match term {
        Some(term) => name.to_lowercase().contains(&term.to_lowercase()),
        None => true,
    }
}

/// Sorts ascending by case-insensitive name, ties broken by exact name.
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
    });
}

/// Cuts `items[(page-1)*limit .. page*limit]`, clamped to the bounds.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let limit = limit.max(1);
    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit).min(total);
    let end = start.saturating_add(limit).min(total);

    let items = items.into_iter().skip(start).take(end - start).collect();

    Page {
        items,
        total,
        total_pages,
        page,
    }
}

/// Filters, sorts and pages files; sorts folders without filtering.
pub fn apply(
    mut files: Vec<FileEntry>,
    mut folders: Vec<FolderEntry>,
    request: &PageRequest,
) -> (Page<FileEntry>, Vec<FolderEntry>) {
    let term = request.search.as_deref();
    files.retain(|file| matches_search(&file.name, term));

    sort_by_name(&mut files);
    sort_by_name(&mut folders);

    (paginate(files, request.page, request.limit), folders)
}
