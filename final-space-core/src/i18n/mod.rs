//! Gallery UI text (i18n)
//!
//! Plain Rust structs checked at compile time. The gallery ships in Spanish
//! only, so [`t`] always resolves to the es-ES table.

mod es_es;
pub mod keys;

pub use keys::*;

/// Get the translation table.
///
/// # Example
///
/// ```
/// use final_space_core::i18n::t;
///
/// assert_eq!(t().gallery.next, "Siguiente");
/// ```
pub fn t() -> &'static Translations {
    &es_es::TRANSLATIONS
}

/// "Total de personajes: N | Página X de Y"
pub fn page_summary(total: usize, page: usize, total_pages: usize) -> String {
    let p = &t().gallery.pagination;
    format!(
        "{}: {total} | {} {page} {} {total_pages}",
        p.total_label, p.page_label, p.of
    )
}

/// "...y N más"
pub fn more_aliases(hidden: usize) -> String {
    let d = &t().detail;
    format!("{} {hidden} {}", d.more_prefix, d.more_suffix)
}
