//! # Reckon Architecture
//!
//! Reckon is a **UI-agnostic calculation-board library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders the board, prints messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads a Board, applies one transition, saves it back     │
//! │  - Resolves user selectors to ids; reports via CmdMessage   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core State (board.rs, eval.rs, moves.rs)                   │
//! │  - Pure in-memory transitions, no I/O whatsoever            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal.
//! Diagnostics—including failed evaluations—travel as [`commands::CmdMessage`]
//! values for the client to render; a malformed expression is not an error
//! in the `Result` sense, it just leaves the board untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`board`]: The board aggregate and its transition rules
//! - [`eval`]: The restricted arithmetic parser/evaluator
//! - [`moves`]: Move-instruction planning (drag semantics without a GUI)
//! - [`commands`]: One module per operation family
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`index`]: User-facing selectors (`2:1`, names, `trash`)
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod commands;
pub mod error;
pub mod eval;
pub mod index;
pub mod model;
pub mod moves;
pub mod store;
