//! Morpheme Lab
//!
//! Word morphology explorer and prefix/root/suffix practice game.
//!
//! # Quick Start
//!
//! ```rust
//! use morpheme_lab::core::Role;
//! use morpheme_lab::segment::HeuristicSegmenter;
//!
//! let segmenter = HeuristicSegmenter::default();
//! let parts = segmenter.segment("unhappiness");
//! assert_eq!(parts.first().map(|f| f.role()), Some(Role::Prefix));
//! assert_eq!(parts.last().map(|f| f.text()), Some("ness"));
//! ```

// Core domain types
pub mod core;

// Affix tables and segmentation
pub mod affixes;
pub mod segment;

// Remote analysis service client
pub mod service;

// Persisted state and the analysis cache
pub mod store;

// Reading, practice setup and the game
pub mod game;
pub mod practice;
pub mod reader;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
