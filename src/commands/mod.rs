//! User-facing commands
//!
//! A single porcelain-style command is exposed:
//!
//! - `open-modified`: resolve the repository working directory for the
//!   current project context and open every file with unstaged modifications.

pub mod open_modified;
