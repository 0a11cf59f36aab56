//! Exhaustive solver for a river crossing constraint puzzle.
//!
//! Three safe and three unsafe agents must cross from the origin bank to
//! the destination bank in a two-seat vehicle, and unsafe agents may
//! never outnumber safe agents on a bank where safe agents stand. This
//! crate models the configurations and the ten possible crossings, and
//! enumerates every acyclic sequence of moves from the all-on-origin
//! start to the all-on-destination goal.

pub mod action;
pub mod report;
pub mod search;
pub mod state;

// Re-export main types
pub use action::{Action, ActionName, CATALOG, VEHICLE_CAPACITY};
pub use report::{render_solution, render_summary, LinePrinter};
pub use search::{enumerate_solutions, SearchStats, SolutionLog, SolutionReporter};
pub use state::{Bank, Configuration, AGENTS_PER_CLASS};
