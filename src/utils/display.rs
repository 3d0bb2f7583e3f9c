//! Display and output formatting utilities

use crate::universe::{Cell, Universe};

/// Format a sparse population for console output
pub struct PopulationFormatter;

impl PopulationFormatter {
    /// Render the live cells as a character grid covering the population's
    /// bounding rectangle.
    pub fn format_universe(universe: &Universe) -> String {
        if universe.is_empty() {
            return "(extinct)\n".to_string();
        }

        let bounds = universe.bounds();
        let mut output =
            String::with_capacity((bounds.height as usize + 1) * (bounds.width as usize + 2));

        for y in bounds.min_y..=bounds.min_y + bounds.height {
            for x in bounds.min_x..=bounds.min_x + bounds.width {
                output.push(if universe.is_alive(Cell::new(x, y)) {
                    '█'
                } else {
                    '·'
                });
            }
            output.push('\n');
        }

        output
    }

    /// One-line statistics: generation, live count, bounding rectangle.
    pub fn format_summary(universe: &Universe) -> String {
        let bounds = universe.bounds();
        format!(
            "Generation {} | Living cells: {} | Bounds: origin ({}, {}), extent {}x{}",
            universe.generation(),
            universe.count(),
            bounds.min_x,
            bounds.min_y,
            bounds.width,
            bounds.height,
        )
    }

    /// List the live cells in a stable, sorted order.
    pub fn format_cell_list(universe: &Universe) -> String {
        let mut cells = universe.population();
        cells.sort();

        let mut output = String::new();
        for cell in cells {
            output.push_str(&format!("({})\n", cell));
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
