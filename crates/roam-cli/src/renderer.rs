//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use roam_core::{StateView, WorkflowState};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks; termimad would strip them
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            println!("{}", markdown.trim_end());
        }
        Ok(())
    }

    /// Render one workflow state. Loading and Error go to stderr so stdout
    /// only ever carries the itinerary.
    pub fn render_state(&self, state: &WorkflowState) -> Result<()> {
        let view = StateView(state).to_string();
        match state {
            WorkflowState::Idle => Ok(()),
            WorkflowState::Success(_) => self.render(&view),
            WorkflowState::Loading => {
                self.status_line(&view, "\x1b[2m");
                Ok(())
            }
            WorkflowState::Error(_) => {
                self.status_line(&view, "\x1b[31m");
                Ok(())
            }
        }
    }

    fn status_line(&self, text: &str, style: &str) {
        if self.rich_enabled {
            eprintln!("{style}{text}\x1b[0m");
        } else {
            eprintln!("{text}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
