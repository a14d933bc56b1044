pub mod migration;
pub use migration::{Migration, MigrationConfig, StatementEdges};

mod serializer;

pub mod stmt;
pub use stmt::Statement;

pub use schemata_core::{Dependencies, Error, NamedObject, Result};
