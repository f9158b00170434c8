//! Emeowtions - cat emotion analysis CLI
//!
//! This crate provides the core functionality for capturing cat sounds from the
//! microphone or from media files and classifying the emotion they carry.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal, FFmpeg, analyzers, config)
//! - **CLI**: Command-line interface, argument parsing, and the app runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
