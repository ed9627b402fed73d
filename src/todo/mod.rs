//! Discovery of TODO markers in a source tree.
//!
//! - `extract`: per-file marker extraction
//! - `scanner`: recursive, order-preserving tree walk
//! - `types`: the `MarkerRecord` produced by both

pub mod extract;
pub mod scanner;
pub mod types;

pub use extract::{DEFAULT_MARKER, MarkerExtractor};
pub use scanner::TreeScanner;
pub use types::MarkerRecord;
