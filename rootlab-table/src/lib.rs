//! Console tables drawn with Unicode box-drawing characters.
//!
//! ```
//! use rootlab_table::Table;
//!
//! let table = Table::new(["Header1", "Header2"])
//!     .with_rows([["Row1Col1", "Row1Col2"], ["Row2Col1", "Row2Col2"]])
//!     .expect("rows match the header");
//!
//! let rendered = table.to_string();
//! assert!(rendered.starts_with("┌──────────┬──────────┐\n"));
//! ```

mod error;
pub mod glyph;
mod table;

pub use error::TableError;
pub use table::Table;
