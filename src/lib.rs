//! Secretdump - dump Google Cloud Secret Manager secrets to a file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── dump          # The list → fetch → write pipeline
//! │   ├── completions   # Shell completions
//! │   └── output        # Styled stderr output
//! └── core/             # Core library components
//!     ├── config        # Validated run configuration
//!     ├── domain        # Ordered name/value collections
//!     ├── service/      # Secret service backends
//!     │   ├── mod       # SecretService trait and resource names
//!     │   ├── gcp       # Google Cloud Secret Manager
//!     │   └── memory    # In-memory backend
//!     ├── lister        # List secret names
//!     ├── fetcher       # Fetch latest values
//!     └── writer        # env / json / stdout output
//! ```
//!
//! Every stage is fail-fast: an error anywhere aborts the run before any
//! output is written.

pub mod cli;
pub mod core;
pub mod error;
