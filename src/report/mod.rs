//! Diagnostics and the import cross-check.
//!
//! The reporter is a pure consumer of the completed module graph: it emits
//! one diagnostic per unresolved import (missing module or missing symbol)
//! in a stable, deterministic order, plus the gather-phase findings the
//! pipeline attaches along the way.

mod checker;
mod diagnostics;

pub use checker::check_modules;
pub use diagnostics::{Diagnostic, Severity};
