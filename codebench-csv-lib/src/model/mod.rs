//! Codebench entities and their row/header contract
//!
//! Every entity kind maps to exactly one CSV table. The table layout is part of the
//! compatibility contract with downstream analysis, so column order and naming must stay
//! stable.
//!
//! # Implementation Model
//!
//! Entities are plain structs linked to their parents through shared, non-owning
//! references (`Arc`). The [`Record`] trait exposes the static column list of an entity
//! kind and converts an instance into a [`Row`] of export-safe [`Field`] values, with each
//! parent reference replaced by the parent's identifying value (description or code).
//!
//! Header and row are both generated by `define_record!` from one column list, so they
//! cannot disagree in length or order. Runs and solutions embed [`Metrics`] and
//! [`CodeTokens`] bundles whose columns are inlined after the entity's own columns; an
//! absent bundle exports as all-unset fields.
//!
//! [`ErrorCount`] is the only entity whose references are filled in after construction.
//! They are held as [`Link`]s and building its row before they are set fails with a
//! [`MissingReference`].

mod activity;
mod bundles;
mod class;
mod error_count;
mod field;
mod link;
mod period;
mod record;
mod run;
mod solution;
mod student;
mod table_kind;

use record::define_record;

pub use activity::Activity;
pub use bundles::{CodeTokens, Metrics};
pub use class::Class;
pub use error_count::ErrorCount;
pub use field::{Field, Row};
pub use link::Link;
pub use period::Period;
pub use record::{MissingReference, Record};
pub use run::Run;
pub use solution::Solution;
pub use student::Student;
pub use table_kind::TableKind;
