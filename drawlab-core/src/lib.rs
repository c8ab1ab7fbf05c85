//! DrawLab Core — draw history, histogram pipeline, chart controller, data layer.
//!
//! This crate contains everything below the terminal shells:
//! - Domain types (draw records, histories, game configurations)
//! - Histogram build → rank → colorize pipeline
//! - Annotation slot tracking for the selected-date overlay
//! - Chart controller driving the range and single-date selectors
//! - Data layer: CSV ingest, HTTP draw provider, file cache, synthetic histories

pub mod chart;
pub mod data;
pub mod domain;
