//! Presentation layer: search, pagination, detail selection and the
//! gallery lifecycle.

pub mod filter;
pub mod pagination;
pub mod state;
pub mod view;

pub use filter::{filter_by_name, filter_indices};
pub use pagination::{PAGE_SIZE, paginate, total_pages};
pub use state::{GalleryState, LoadedGallery};
pub use view::{AliasPreview, CharacterCard, CharacterDetail, GalleryView, StatusTone};
