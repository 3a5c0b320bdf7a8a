//! Text preview of the view grid.
//!
//! Draws each visible pane as a bordered block titled with its slot name on
//! the pane's background colour. The active pane gets a double border and a
//! `*` marker. Hidden panes and divider gaps are left untouched.

use crate::layout::QuadLayout;
use crate::model::CursorHint;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

/// Marker appended to the title of the active pane.
const ACTIVE_MARKER: &str = " *";

/// Widget drawing the visible panes of a [`QuadLayout`].
///
/// Grid coordinates are mapped onto the render area by offset, so rendering
/// into an area the size of [`QuadLayout::area`] reproduces the grid 1:1.
#[derive(Debug, Clone, Copy)]
pub struct LayoutPreview<'a> {
    layout: &'a QuadLayout,
}

impl<'a> LayoutPreview<'a> {
    /// Preview of `layout` at its current geometry.
    pub fn new(layout: &'a QuadLayout) -> Self {
        Self { layout }
    }
}

impl Widget for LayoutPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let origin = self.layout.area();
        let active = self.layout.active();

        for view in self.layout.views() {
            let pane = Rect::new(
                area.x.saturating_add(view.area().x.saturating_sub(origin.x)),
                area.y.saturating_add(view.area().y.saturating_sub(origin.y)),
                view.area().width,
                view.area().height,
            )
            .intersection(area);
            if pane.width < 2 || pane.height < 2 {
                continue;
            }

            let is_active = view.id() == active;
            let mut title = view.id().as_str().to_string();
            if is_active {
                title.push_str(ACTIVE_MARKER);
            }
            let mut style = Style::default().bg(view.back_color());
            if view.cursor() == CursorHint::Drag {
                style = style.add_modifier(Modifier::BOLD);
            }

            Block::default()
                .borders(Borders::ALL)
                .border_type(if is_active {
                    BorderType::Double
                } else {
                    BorderType::Plain
                })
                .title(title)
                .style(style)
                .render(pane, buf);
        }
    }
}

/// Render the grid into plain text, one line per row.
///
/// Trailing blanks are trimmed from every line.
pub fn preview_text(layout: &QuadLayout) -> String {
    let grid = layout.area();
    let area = Rect::new(0, 0, grid.width, grid.height);
    let mut buf = Buffer::empty(area);
    LayoutPreview::new(layout).render(area, &mut buf);
    buffer_lines(&buf).join("\n")
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
