//! # Playbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/playbookapp/` — Core library: content store, path enumeration, search
//! - `crates/playbook/` — This CLI tool, the build tooling side of a playbook site
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/playbook/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging + context wiring + dispatch (commands.rs)        │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/playbookapp/src/api.rs)                  │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, context initialization, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! Logic is tested in the library. The CLI is covered end to end in
//! `tests/cli_e2e.rs`, running the real binary against a temporary content tree.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
