//! Command handlers.
//!
//! | File     | Invocation     | Description                                 |
//! |----------|----------------|---------------------------------------------|
//! | `run.rs` | `dot`          | Resolve paths and list the backup directory |

pub mod run;
