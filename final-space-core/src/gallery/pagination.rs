//! Fixed-size pagination over the filtered list
//!
//! Pages are 1-based. Navigation never lands outside `1..=total_pages`; the
//! functions here still return an empty slice for such pages.

/// Cards per page.
pub const PAGE_SIZE: usize = 12;

/// Number of pages needed for `len` items. Zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The slice `[(page-1)*size, page*size)` clipped to `items`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or_default()
}

/// Whether `page` can be navigated to.
pub fn is_valid_page(page: usize, len: usize, page_size: usize) -> bool {
    (1..=total_pages(len, page_size)).contains(&page)
}
