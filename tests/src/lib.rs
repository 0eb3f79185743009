//! # Genesis Bootstrap Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs     # Operator-level runs against a temp directory
//!     └── determinism.rs   # Cross-machine agreement of generated files
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gb-tests
//! cargo test -p gb-tests integration::scenarios::
//! ```

pub mod integration;
