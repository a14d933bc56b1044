mod alter;
pub use alter::AlterStmt;

mod column_def;
pub use column_def::ColumnDef;

mod create;
pub use create::CreateStmt;

mod drop;
pub use drop::DropStmt;

mod expr;
pub use expr::Expr;

mod expr_add_column;
pub use expr_add_column::ExprAddColumn;

mod expr_add_constraint;
pub use expr_add_constraint::ExprAddConstraint;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_assign;
pub use expr_assign::ExprAssign;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_foreign_key;
pub use expr_foreign_key::ExprForeignKey;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod expr_table_body;
pub use expr_table_body::ExprTableBody;

mod ident;
pub use ident::{Ident, QualifiedName};

mod insert;
pub use insert::InsertStmt;

mod on_conflict;
pub use on_conflict::OnConflict;

mod op_binary;
pub use op_binary::BinaryOp;

mod select;
pub use select::SelectStmt;

mod table_desc;
pub use table_desc::TableDesc;

mod target;
pub use target::Target;

mod update;
pub use update::UpdateStmt;

mod value;
pub use value::Value;

mod with;
pub use with::WithStmt;

pub use schemata_core::{Dependencies, NamedObject};

use schemata_core::Result;

/// A statement that can be rendered to SQL and placed in a migration.
///
/// Every statement reports the objects it needs to already exist
/// ([`Statement::depended_on`]) and the objects it brings into existence
/// ([`Statement::solved`]). Both fail only when a name cannot be resolved to
/// a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Alter(AlterStmt),
    Create(CreateStmt),
    Drop(DropStmt),
    Insert(InsertStmt),
    Update(UpdateStmt),
    Select(SelectStmt),
    With(WithStmt),
}

impl Statement {
    pub fn depended_on(&self) -> Result<Dependencies> {
        match self {
            Statement::Alter(stmt) => stmt.depended_on(),
            Statement::Create(stmt) => stmt.depended_on(),
            Statement::Drop(stmt) => Ok(stmt.depended_on()),
            Statement::Insert(stmt) => stmt.depended_on(),
            Statement::Update(stmt) => stmt.depended_on(),
            Statement::Select(stmt) => Ok(stmt.depended_on()),
            Statement::With(stmt) => Ok(stmt.depended_on()),
        }
    }

    pub fn solved(&self) -> Result<Dependencies> {
        match self {
            Statement::Alter(stmt) => stmt.solved(),
            Statement::Create(stmt) => stmt.solved(),
            Statement::Drop(stmt) => Ok(stmt.solved()),
            Statement::Insert(stmt) => Ok(stmt.solved()),
            Statement::Update(stmt) => Ok(stmt.solved()),
            Statement::Select(stmt) => Ok(stmt.solved()),
            Statement::With(stmt) => Ok(stmt.solved()),
        }
    }
}
