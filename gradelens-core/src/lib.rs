#![warn(missing_docs)]
//! GradeLens Core - Data Model and Grade Classification
//!
//! This crate provides the foundational types for grade analytics:
//! - `Roster` with validated, index-aligned score series
//! - `Component` identifying the five grade components
//! - `Grade` letter classification via configurable `GradeBands`

mod grade;
mod roster;

pub use grade::{Grade, GradeBands, GradeBandsError};
pub use roster::{Component, Roster, RosterError, StudentRecord};
