use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{address_bar_rect, layout_regions};
use crate::ui::load::ViewLoadState;
use crate::ui::theme::{BRAND, ERROR, LINK, PENDING, SELECTION, TEXT};
use crate::views::{Element, Node};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let state = app.store().state();
    let location = app.history().current_href();
    frame.render_widget(Header::new(&location, &state).widget(), header);

    frame.render_widget(Clear, body);
    let lines = match app.load_state() {
        ViewLoadState::Idle => Vec::new(),
        ViewLoadState::Pending { request } => vec![Line::from(Span::styled(
            format!("  Loading {}...", request.view),
            Style::default().fg(PENDING),
        ))],
        ViewLoadState::Failed { request, message } => vec![
            Line::from(Span::styled(
                format!("  Could not load {}: {}", request.view, message),
                Style::default().fg(ERROR),
            )),
            Line::from(""),
            Line::from("  Ctrl+R: retry   Esc: back"),
        ],
        ViewLoadState::Resolved { .. } => app
            .render_page()
            .map(|tree| element_lines(&tree, app.interaction().selected))
            .unwrap_or_default(),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);

    frame.render_widget(Footer::new(app.status()).widget(footer), footer);

    if app.focus() == Focus::AddressBar {
        let bar = address_bar_rect(body);
        frame.render_widget(Clear, bar);
        let popup = Block::default()
            .title(Span::styled("Open location", Style::default().fg(BRAND)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT));
        let input = Paragraph::new(Line::from(format!("{}_", app.address()))).block(popup);
        frame.render_widget(input, bar);
    }
}

/// Flatten an element tree into terminal lines.
///
/// `selected` is the index of the highlighted link in document order.
pub fn element_lines(tree: &Element, selected: usize) -> Vec<Line<'static>> {
    let mut renderer = TreeRenderer {
        lines: Vec::new(),
        link_index: 0,
        selected,
    };
    renderer.visit(tree, 0);
    renderer.lines
}

struct TreeRenderer {
    lines: Vec<Line<'static>>,
    link_index: usize,
    selected: usize,
}

impl TreeRenderer {
    fn visit(&mut self, el: &Element, depth: usize) {
        let indent = "  ".repeat(depth + 1);
        let focused = el.get_attr("data-focused").is_some();
        let text = el.text_content();

        match el.tag() {
            "h1" | "h2" | "h3" => {
                let color = if el.tag() == "h1" { BRAND } else { TEXT };
                self.lines.push(Line::from(Span::styled(
                    format!("{}{}", indent, text),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
            }
            "p" | "span" => {
                let style = if el.has_class("session-form__error") {
                    Style::default().fg(ERROR)
                } else {
                    Style::default()
                };
                self.lines
                    .push(Line::from(Span::styled(format!("{}{}", indent, text), style)));
            }
            "li" => self.lines.push(Line::from(format!("{}• {}", indent, text))),
            "a" => {
                let mut style = Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED);
                if self.link_index == self.selected {
                    style = style.bg(SELECTION).add_modifier(Modifier::BOLD);
                }
                self.link_index += 1;
                self.lines
                    .push(Line::from(Span::styled(format!("{}→ {}", indent, text), style)));
            }
            "input" => {
                let name = el.get_attr("name").unwrap_or("input");
                let value = el.get_attr("value").unwrap_or("");
                let placeholder = el.get_attr("placeholder").unwrap_or(name);
                let shown = if value.is_empty() && !focused {
                    Span::styled(
                        placeholder.to_string(),
                        Style::default().add_modifier(Modifier::DIM),
                    )
                } else {
                    Span::raw(format!("{}{}", value, if focused { "_" } else { "" }))
                };
                let style = highlight(focused);
                self.lines.push(Line::from(vec![
                    Span::styled(format!("{}{:>9}: [", indent, name), style),
                    shown,
                    Span::styled("]", style),
                ]));
            }
            "button" => {
                let disabled = el.get_attr("disabled").is_some();
                let mut style = highlight(focused);
                if disabled {
                    style = style.add_modifier(Modifier::DIM);
                }
                self.lines
                    .push(Line::from(Span::styled(format!("{}[ {} ]", indent, text), style)));
            }
            "video" => {
                let src = el.get_attr("src").unwrap_or_default();
                self.lines.push(Line::from(format!("{}▶ {}", indent, src)));
            }
            _ => {
                let marker = el.has_class("miniature--selected");
                if marker {
                    self.lines.push(Line::from(Span::styled(
                        format!("{}▸", indent),
                        Style::default().fg(BRAND),
                    )));
                }
                let depth = if el.has_class("miniature") { depth + 1 } else { depth };
                for child in el.children() {
                    match child {
                        Node::Element(child) => self.visit(child, depth),
                        Node::Text(text) if !text.trim().is_empty() => {
                            self.lines.push(Line::from(format!("{}{}", indent, text.trim())));
                        }
                        Node::Text(_) => {}
                    }
                }
                if el.has_class("miniature") {
                    self.lines.push(Line::from(""));
                }
            }
        }
    }
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTION).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn renders_headings_links_and_buttons() {
        let tree = Element::new("div")
            .child(Element::new("h1").text("Voogle"))
            .child(Element::new("a").attr("href", "#/gallery").text("Gallery"))
            .child(Element::new("button").attr("type", "submit").text("Log in"));
        let text = plain(&element_lines(&tree, 0));
        assert_eq!(text, vec!["  Voogle", "  → Gallery", "  [ Log in ]"]);
    }

    #[test]
    fn selected_link_is_highlighted() {
        let tree = Element::new("nav")
            .child(Element::new("a").attr("href", "#/a").text("A"))
            .child(Element::new("a").attr("href", "#/b").text("B"));
        let lines = element_lines(&tree, 1);
        assert_ne!(lines[0].spans[0].style.bg, Some(SELECTION));
        assert_eq!(lines[1].spans[0].style.bg, Some(SELECTION));
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let tree = Element::new("form").child(
            Element::new("input")
                .attr("name", "username")
                .attr("placeholder", "Username")
                .attr("value", ""),
        );
        let text = plain(&element_lines(&tree, 0));
        assert_eq!(text, vec!["   username: [Username]"]);
    }
}
