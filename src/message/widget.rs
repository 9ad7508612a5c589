//! Terminal rendering for alert regions

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{AlertBody, AlertRegion};

impl Widget for &AlertRegion {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(Color::Red);

        let lines: Vec<Line> = match &self.body {
            AlertBody::Text(text) => vec![Line::from(Span::styled(text.as_str(), style))],
            AlertBody::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{}. ", i + 1),
                            style.add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(item.as_str(), style),
                    ])
                })
                .collect(),
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ValidationMessage;

    fn buffer_text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_single_message() {
        let region = ValidationMessage::new("f").message("Required").render().unwrap();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        (&region).render(area, &mut buf);
        assert_eq!(buffer_text(&buf), "Required");
    }

    #[test]
    fn test_renders_numbered_list() {
        let region = ValidationMessage::new("f")
            .messages(["Name is required", "Amount too low"])
            .render()
            .unwrap();
        let area = Rect::new(0, 0, 24, 2);
        let mut buf = Buffer::empty(area);
        (&region).render(area, &mut buf);
        assert_eq!(buffer_text(&buf), "1. Name is required\n2. Amount too low");
    }
}
