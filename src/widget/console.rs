use colored::Colorize;

use crate::widget::RenderSink;

/// Render the dashboard panel to the terminal.
pub struct ConsoleRender;

impl ConsoleRender {
    pub fn banner() {
        println!("{}", "=".repeat(60).bright_blue());
        println!("{}", "POSTING AVERAGE".bold().bright_green());
        println!("{}", "Average time between published posts".bright_cyan());
        println!("{}", "=".repeat(60).bright_blue());
        println!();
    }
}

impl RenderSink for ConsoleRender {
    fn render_section(&mut self, heading: &str, body: &str) {
        println!("  {}", heading.yellow().bold());
        println!("  {}", body.cyan());
        println!();
    }
}
