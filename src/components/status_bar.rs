use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::{Component, Frame};
use crate::action::Action;
use crate::VERSION;

/// One-line footer under the hero: crate identity on the left, the quit
/// hint on the right, and a transient message line for reported errors.
pub struct StatusBar {
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(format!("Error: {message}")),
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let identity = Span::styled(
            format!("{} v{VERSION}", env!("CARGO_PKG_NAME")),
            Style::default().fg(Color::Gray).italic(),
        );
        let identity_line = Paragraph::new(identity).style(Style::default().bg(Color::Black));
        f.render_widget(identity_line, layout[1]);

        let hint = Span::styled("q: quit", Style::default().fg(Color::DarkGray));
        let hint_line = Paragraph::new(hint)
            .alignment(Alignment::Right)
            .style(Style::default().bg(Color::Black));
        f.render_widget(hint_line, layout[1]);

        let message_line = Paragraph::new(self.message.clone().unwrap_or_default());
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_message_is_kept() {
        let mut status_bar = StatusBar::new();
        assert_eq!(status_bar.message(), None);

        status_bar
            .update(Action::SystemMessage("ready".to_string()))
            .unwrap();
        assert_eq!(status_bar.message(), Some("ready"));
    }

    #[test]
    fn test_error_is_prefixed() {
        let mut status_bar = StatusBar::new();
        status_bar
            .update(Action::Error("draw failed".to_string()))
            .unwrap();
        assert_eq!(status_bar.message(), Some("Error: draw failed"));
    }

    #[test]
    fn test_other_actions_leave_message_alone() {
        let mut status_bar = StatusBar::new();
        status_bar
            .update(Action::SystemMessage("ready".to_string()))
            .unwrap();
        status_bar.update(Action::Tick).unwrap();
        status_bar.update(Action::Render).unwrap();
        assert_eq!(status_bar.message(), Some("ready"));
    }
}
