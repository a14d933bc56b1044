//! Dependency edges exchanged between statements and the migration planner.
//!
//! A statement reports the objects it needs ([`Dependencies`] from
//! `depended_on`) and the objects it brings into existence (`solved`). The
//! planner matches the two by exact [`NamedObject`] equality.

mod dependencies;
pub use dependencies::Dependencies;

mod named_object;
pub use named_object::NamedObject;
