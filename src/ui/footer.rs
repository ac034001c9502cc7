use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{BRAND, FRAME, MUTED, TEXT};

const KEYS: [(&str, &str); 5] = [
    ("^O", "open"),
    ("^B/^F", "back/fwd"),
    ("^R", "reload"),
    ("^L", "logout"),
    ("^Q", "quit"),
];

/// Bottom bar: key bindings, replaced by the latest status message.
pub struct Footer<'a> {
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a str>) -> Self {
        Self { status }
    }

    fn key_spans() -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(KEYS.len() * 2);
        for (key, label) in KEYS {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {} ", label), Style::default().fg(MUTED)));
        }
        spans
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let mut spans = match self.status {
            Some(status) => vec![Span::styled(format!(" {}", status), Style::default().fg(TEXT))],
            None => Self::key_spans(),
        };

        let version = concat!("voogle ", env!("CARGO_PKG_VERSION"), " ");
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let inner = usize::from(area.width.saturating_sub(2));
        let gap = inner.saturating_sub(used + version.len());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(version, Style::default().fg(MUTED)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FRAME)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_replaces_key_hints() {
        let footer = Footer::new(Some("Logged out"));
        let mut buf = ratatui::buffer::Buffer::empty(Rect::new(0, 0, 60, 3));
        ratatui::widgets::Widget::render(footer.widget(buf.area), buf.area, &mut buf);
        let row: String = (0..60).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Logged out"));
        assert!(!row.contains("reload"));
    }
}
