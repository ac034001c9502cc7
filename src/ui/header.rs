use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::store::AppState;
use crate::ui::theme::{BRAND, ERROR, FRAME, MUTED, OK, TEXT};

/// Top bar: app name, current hash location, who is logged in.
pub struct Header<'a> {
    location: &'a str,
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(location: &'a str, state: &'a AppState) -> Self {
        Self { location, state }
    }

    fn session_spans(&self) -> [Span<'static>; 2] {
        let session = &self.state.session;
        if session.is_logged_in {
            let user = session.username.as_deref().unwrap_or("anonymous");
            [
                Span::styled("● ", Style::default().fg(OK)),
                Span::styled(user.to_string(), Style::default().fg(TEXT)),
            ]
        } else {
            [
                Span::styled("○ ", Style::default().fg(ERROR)),
                Span::styled("not logged in", Style::default().fg(MUTED)),
            ]
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let divider = || Span::styled(" · ", Style::default().fg(MUTED));
        let [marker, user] = self.session_spans();

        let line = Line::from(vec![
            Span::styled(
                " Voogle",
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            divider(),
            Span::styled(self.location.to_string(), Style::default().fg(TEXT)),
            divider(),
            marker,
            user,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(FRAME)),
        )
    }
}
