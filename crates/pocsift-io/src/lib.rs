pub mod error;
pub mod reader;
pub mod writer;

pub use error::{Result, TableError};
pub use reader::{parse_contact_rows, read_contact_rows, REQUIRED_COLUMNS, SECONDARY_COLUMNS};
pub use writer::{render_contacts, write_contacts, OUTPUT_COLUMNS};
