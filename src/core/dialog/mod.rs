//! Dialog data model and store access.

pub mod error;
pub mod models;
pub mod source;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{Dialog, Message, Token};
pub use source::DialogSource;
pub use store::{DateRange, DialogStore, JsonDialogStore, MemoryDialogStore};
