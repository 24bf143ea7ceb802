use ratatui::style::{Color, Modifier, Style};

/// Palette for the landing screen. The hero view picks one based on its
/// `dark_mode` flag; only the dark palette is currently reachable because
/// no toggle is wired up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Style,
    pub grid: Style,
    pub title: Style,
    pub tagline: Style,
    pub snippet: Style,
    pub snippet_border: Style,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Style::default().bg(Color::Rgb(13, 17, 23)),
            grid: Style::default()
                .fg(Color::Rgb(48, 54, 61))
                .bg(Color::Rgb(13, 17, 23)),
            title: Style::default()
                .fg(Color::Rgb(201, 209, 217))
                .add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(Color::Rgb(139, 148, 158)),
            snippet: Style::default()
                .fg(Color::Rgb(126, 231, 135))
                .bg(Color::Rgb(22, 27, 34)),
            snippet_border: Style::default()
                .fg(Color::Rgb(48, 54, 61))
                .bg(Color::Rgb(22, 27, 34)),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Style::default().bg(Color::Rgb(255, 255, 255)),
            grid: Style::default()
                .fg(Color::Rgb(208, 215, 222))
                .bg(Color::Rgb(255, 255, 255)),
            title: Style::default()
                .fg(Color::Rgb(31, 35, 40))
                .add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(Color::Rgb(101, 109, 118)),
            snippet: Style::default()
                .fg(Color::Rgb(26, 127, 55))
                .bg(Color::Rgb(246, 248, 250)),
            snippet_border: Style::default()
                .fg(Color::Rgb(208, 215, 222))
                .bg(Color::Rgb(246, 248, 250)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::dark(), Theme::light());
    }
}
