use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Decorative backdrop for the landing screen: a themed fill with a dim
/// dot on a fixed stride. Stands in for the layered background image of
/// the web rendition, which degrades silently in a terminal.
#[derive(Clone, Debug, Default)]
pub struct DotGrid {
    background: Style,
    grid: Style,
}

impl DotGrid {
    pub const DOT: &'static str = "·";
    pub const STRIDE: u16 = 2;

    pub fn new(background: Style, grid: Style) -> Self {
        Self { background, grid }
    }
}

impl Widget for DotGrid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &mut buf[(x, y)];
                if (x - area.left()) % Self::STRIDE == 0 && (y - area.top()) % Self::STRIDE == 0 {
                    cell.set_symbol(Self::DOT);
                    cell.set_style(self.grid);
                } else {
                    cell.set_symbol(" ");
                    cell.set_style(self.background);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    use super::*;
    use crate::theme::Theme;

    fn render(area: Rect) -> Buffer {
        let theme = Theme::dark();
        let mut buf = Buffer::empty(area);
        DotGrid::new(theme.background, theme.grid).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_dots_on_stride() {
        let buf = render(Rect::new(0, 0, 5, 5));
        assert_eq!(buf[(0, 0)].symbol(), DotGrid::DOT);
        assert_eq!(buf[(2, 0)].symbol(), DotGrid::DOT);
        assert_eq!(buf[(0, 2)].symbol(), DotGrid::DOT);
        assert_eq!(buf[(4, 4)].symbol(), DotGrid::DOT);
    }

    #[test]
    fn test_blank_between_dots() {
        let buf = render(Rect::new(0, 0, 5, 5));
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(0, 1)].symbol(), " ");
        assert_eq!(buf[(3, 3)].symbol(), " ");
    }

    #[test]
    fn test_offset_area_uses_local_origin() {
        let buf = render(Rect::new(3, 1, 4, 4));
        assert_eq!(buf[(3, 1)].symbol(), DotGrid::DOT);
        assert_eq!(buf[(4, 1)].symbol(), " ");
        assert_eq!(buf[(5, 3)].symbol(), DotGrid::DOT);
    }

    #[test]
    fn test_empty_area() {
        let buf = render(Rect::new(0, 0, 0, 0));
        assert_eq!(buf.content().len(), 0);
    }
}
