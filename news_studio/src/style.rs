//! Terminal styling for studio output.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to CLI output.
pub trait StudioStyle {
    fn heading_style(&self) -> ColoredString;
    fn path_style(&self) -> ColoredString;
    fn ok_style(&self) -> ColoredString;
    fn blocked_style(&self) -> ColoredString;
    fn warning_style(&self) -> ColoredString;
    fn dim_style(&self) -> ColoredString;
}

impl StudioStyle for &str {
    fn heading_style(&self) -> ColoredString {
        self.bold().underline()
    }
    fn path_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
    fn ok_style(&self) -> ColoredString {
        self.bright_green()
    }
    fn blocked_style(&self) -> ColoredString {
        self.bright_red().bold()
    }
    fn warning_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn dim_style(&self) -> ColoredString {
        self.truecolor(120, 120, 120)
    }
}

impl StudioStyle for String {
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn path_style(&self) -> ColoredString {
        self.as_str().path_style()
    }
    fn ok_style(&self) -> ColoredString {
        self.as_str().ok_style()
    }
    fn blocked_style(&self) -> ColoredString {
        self.as_str().blocked_style()
    }
    fn warning_style(&self) -> ColoredString {
        self.as_str().warning_style()
    }
    fn dim_style(&self) -> ColoredString {
        self.as_str().dim_style()
    }
}
