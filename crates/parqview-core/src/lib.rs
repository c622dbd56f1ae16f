pub mod error;
pub mod listing;
pub mod preview;

pub use error::PeekError;
pub use listing::{format_size, read_dir_sorted, DirEntry};
pub use preview::{ParquetLoader, PreviewLoader, TablePreview};
