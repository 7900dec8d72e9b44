//! # Staffdb Architecture
//!
//! Staffdb is a library for managing a small collection of employee records
//! persisted as a single JSON file, with a CLI client on top. The library is
//! the product; the binary is just one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                             │
//! │  - Parses process arguments, prints results                │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Manager Layer (manager.rs)                                │
//! │  - Dispatches one operation request per call               │
//! │  - Validates field values, applies mutations               │
//! │  - Returns `Result<String, StaffError>`                    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - Abstract StaffStore trait                               │
//! │  - JsonFileStore (production), InMemoryStore (testing)     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The request grammar
//!
//! A request is an operation keyword (`-add`, `-update`, `-get`, `-delete`,
//! `-getall`) followed by `Name:Value` tokens, where `Name` is one of the
//! record fields (`Id`, `FirstName`, `LastName`, `SalaryPerHour`). The
//! [`fields`] module maps those tokens onto fixed field slots; the
//! [`manager`] module interprets them per operation.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `manager.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. Every operation
//! returns the string the caller should show, or a [`error::StaffError`]
//! whose `Display` is that string.
//!
//! ## Module Overview
//!
//! - [`manager`]: the operation engine — entry point for all operations
//! - [`fields`]: the fixed field schema and `Name:Value` token mapping
//! - [`model`]: the `Employee` record and salary formatting conventions
//! - [`store`]: storage abstraction and implementations
//! - [`error`]: error types

pub mod error;
pub mod fields;
pub mod manager;
pub mod model;
pub mod store;
