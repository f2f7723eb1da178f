//! Availability Resolution and Shift Expansion Engine
//!
//! This crate provides the scheduling core of a personnel rostering system:
//! precedence-based presence resolution across manual overrides, personal
//! rotations, and team rotations, plus bounded expansion of recurring task
//! templates into concrete shifts (including continuous 24-hour coverage).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod expansion;
pub mod models;
pub mod resolution;
