//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and external
//! systems. Implementations live in the `adapters` module.
//!
//! The scheduler depends only on [`CheckerRunner`], never on a concrete
//! process launcher, so it can be exercised without spawning `tsc`.

mod checker;

pub use checker::{CheckerRunner, RunOutput, TaskError};
