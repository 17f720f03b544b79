//! Teardown - Clean up a local demo session in one command.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and dispatch
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Fixed cleanup targets
//!     ├── env           # .env backup and redaction
//!     ├── process       # Process termination by name
//!     ├── sweep         # Transcript, log and cache removal
//!     ├── report        # Per-step outcomes
//!     └── runner        # Step sequencing
//! ```
//!
//! # Steps
//!
//! 1. Stop the `cloudflared` tunnel
//! 2. Stop the `uvicorn` server
//! 3. Back up `.env` and revoke `OPENROUTER_API_KEY` / `API_KEY`
//! 4. Delete `*transcript*.json` files and `logs.txt`
//! 5. Remove every `__pycache__` directory
//!
//! Every step is best effort: a failure is reported and the next step runs.

pub mod cli;
pub mod core;
pub mod error;
