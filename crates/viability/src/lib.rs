//! Core library for the "Is My Startup Viable?" calculator: the scoring
//! rubric, session state, example presets, export projection, and the HTTP
//! surface over them.

pub mod calculator;
pub mod config;
pub mod error;
pub mod telemetry;
