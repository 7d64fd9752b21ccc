#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for codebench-csv
//!
//! This library turns the entities discovered in a Codebench dataset (periods, classes,
//! activities, students, runs, reference solutions and interpreter error tallies) into
//! the flat CSV tables consumed by downstream analysis.
//!
//! # Module Organization
//!
//! - [`model`]: Entities, metric bundles and the row/header contract
//! - [`export`]: Table construction and CSV persistence
//! - [`config`]: Configuration file handling
//! - `commands`: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

mod commands;
pub mod config;
pub mod export;
pub mod model;

pub use crate::commands::{Host, run};
