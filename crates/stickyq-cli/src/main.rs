//! # Stickyq CLI
//!
//! A thin command-line client over the `stickyq` library. All query logic lives
//! in the library; this binary reads JSON, parses arguments, and prints results.
//!
//! ## Workspace Structure
//!
//! - `crates/stickyq/` — Core library: accessor, augmenter, stores, registry
//! - `crates/stickyq-cli/` — This binary
//!
//! ## Commands
//!
//! ```text
//! stickyq augment [--input FILE] [--pinned V] [--pinned-first V] [--content-type T]
//! stickyq get <ID>
//! stickyq set <ID> <true|false>
//! stickyq edit <ID> --content-type T [--checkbox V] [--autosave]
//! stickyq schema
//! stickyq config
//! ```
//!
//! Logging goes to stderr through `tracing`; `-v` or `RUST_LOG` turn it up.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
