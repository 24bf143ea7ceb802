use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::{Component, Frame};
use crate::{action::Action, text, theme::Theme, widgets::DotGrid};

/// Landing page copy. The view has no inputs; this is the entire content.
pub const TITLE: &str = "Librarian";
pub const TAGLINE: &str =
    "MCP library where agents query and plug into endpoints autonomously via x402 micropayments";
pub const SNIPPET: &str = "curl -X GET https://api.mcpnexus.ai/library";

const TAGLINE_MAX_WIDTH: usize = 96;

/// The hero view. Renders nothing until the app loop delivers
/// [`Action::Mount`] after the first committed frame; from then on it
/// deterministically shows the backdrop and the centered copy.
pub struct Hero {
    mounted: bool,
    dark_mode: bool,
}

impl Hero {
    pub fn new() -> Self {
        Self {
            mounted: false,
            // Fixed at creation. The light palette exists but nothing
            // toggles this; see DESIGN.md.
            dark_mode: true,
        }
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::dark()
        } else {
            Theme::light()
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Hero {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Mount {
            // One-way transition; repeated mount signals are no-ops.
            self.mounted = true;
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if !self.mounted {
            return Ok(());
        }

        let theme = self.theme();
        f.render_widget(DotGrid::new(theme.background, theme.grid), area);

        let tagline_width = usize::from(area.width.saturating_sub(4)).min(TAGLINE_MAX_WIDTH);
        let wrapped = text::wrap_text(TAGLINE, tagline_width);
        let tagline_height = wrapped.lines().count() as u16;

        // title, gap, tagline, gap, bordered snippet
        let hero_height = tagline_height + 6;
        let vertical = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(hero_height),
                Constraint::Min(0),
            ],
        )
        .split(area);
        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(tagline_height),
                Constraint::Length(1),
                Constraint::Length(3),
            ],
        )
        .split(vertical[1]);

        let title =
            Paragraph::new(Line::from(Span::styled(TITLE, theme.title))).alignment(Alignment::Center);
        f.render_widget(title, rows[0]);

        let tagline_lines = wrapped
            .lines()
            .map(|line| Line::from(Span::styled(line, theme.tagline)))
            .collect::<Vec<_>>();
        let tagline = Paragraph::new(tagline_lines).alignment(Alignment::Center);
        f.render_widget(tagline, rows[2]);

        let snippet_width = (SNIPPET.len() as u16).saturating_add(4).min(area.width);
        let snippet_area = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Min(0),
                Constraint::Length(snippet_width),
                Constraint::Min(0),
            ],
        )
        .split(rows[4])[1];
        f.render_widget(Clear, snippet_area);
        let snippet = Paragraph::new(SNIPPET)
            .style(theme.snippet)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme.snippet_border),
            );
        f.render_widget(snippet, snippet_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn buffer_text(backend: &TestBackend) -> String {
        let buffer = backend.buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(hero: &mut Hero, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| hero.draw(f, f.area()).unwrap())
            .unwrap();
        buffer_text(terminal.backend())
    }

    #[test]
    fn test_unmounted_renders_nothing() {
        let mut hero = Hero::new();
        assert!(!hero.mounted());

        let text = draw(&mut hero, 80, 24);
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_mounted_shows_copy_verbatim() {
        let mut hero = Hero::new();
        hero.update(Action::Mount).unwrap();
        assert!(hero.mounted());

        let text = draw(&mut hero, 120, 40);
        assert!(text.contains(TITLE));
        assert!(text.contains(TAGLINE));
        assert!(text.contains(SNIPPET));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut hero = Hero::new();
        hero.update(Action::Mount).unwrap();

        let first = draw(&mut hero, 120, 40);
        let second = draw(&mut hero, 120, 40);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mount_is_one_way() {
        let mut hero = Hero::new();
        hero.update(Action::Mount).unwrap();

        // No action resets the flag, including a repeated mount.
        for action in [
            Action::Mount,
            Action::Tick,
            Action::Render,
            Action::Resize(80, 24),
            Action::SystemMessage("hi".to_string()),
        ] {
            hero.update(action).unwrap();
            assert!(hero.mounted());
        }
    }

    #[test]
    fn test_dark_mode_is_fixed() {
        let mut hero = Hero::new();
        assert!(hero.dark_mode());

        for action in [
            Action::Tick,
            Action::Render,
            Action::Resize(80, 24),
            Action::Suspend,
            Action::Resume,
            Action::Quit,
            Action::Error("boom".to_string()),
            Action::Mount,
            Action::SystemMessage("hi".to_string()),
            Action::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)),
        ] {
            hero.update(action).unwrap();
            assert!(hero.dark_mode());
        }
    }

    #[test]
    fn test_tagline_wraps_on_narrow_terminal() {
        let mut hero = Hero::new();
        hero.update(Action::Mount).unwrap();

        let text = draw(&mut hero, 48, 24);
        assert!(text.contains(TITLE));
        // The tagline no longer fits on one line, but every word survives.
        assert!(!text.contains(TAGLINE));
        assert!(text.contains("micropayments"));
    }
}
