//! Rendering of discovered solutions and the run summary.
//!
//! Formatting is kept separate from printing: the render functions are
//! pure, and [`LinePrinter`] is the reporter that writes each line to
//! stdout the moment a solution is discovered.

use crate::search::{SearchStats, SolutionReporter};
use crate::state::Configuration;

/// Render one solution as its numbered text line: the 1-based sequence
/// number, then every configuration in path order.
pub fn render_solution(number: usize, path: &[Configuration]) -> String {
    let steps: Vec<String> = path.iter().map(|c| format!("->[{}]", c)).collect();
    format!("{}. {}", number, steps.concat())
}

/// Render the summary line printed after the enumeration: the solution
/// count and the wall-clock duration with five decimal places.
pub fn render_summary(stats: &SearchStats) -> String {
    format!(
        "{} solutions in {:.5}s",
        stats.solutions_found,
        stats.time_elapsed.as_secs_f64()
    )
}

/// A reporter that prints each solution as a numbered line as soon as it
/// is discovered, numbering from 1 in discovery order.
#[derive(Debug, Default)]
pub struct LinePrinter {
    printed: usize,
}

impl LinePrinter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionReporter for LinePrinter {
    fn on_solution_found(&mut self, path: &[Configuration]) {
        self.printed += 1;
        println!("{}", render_solution(self.printed, path));
    }
}
