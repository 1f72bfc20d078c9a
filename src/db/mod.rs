//! Engine Access Layer
//!
//! Everything that talks to the embedded SQLite engine through the single
//! open connection: the session handle, schema introspection, the ad-hoc
//! statement runner, and SQL export/import.

pub mod dump;
pub mod introspect;
pub mod query;
pub mod session;

pub use introspect::{ColumnInfo, IndexInfo, TableData};
pub use query::StatementOutcome;
pub use session::Session;
