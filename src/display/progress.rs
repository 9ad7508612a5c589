//! Onboarding progress indicator
//!
//! Shows the completion score as a bar, either as a plain text line for
//! the CLI or as a ratatui gauge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Gauge, Widget},
};

use crate::completion::{CompletionGroup, CompletionReport};

const DEFAULT_WIDTH: usize = 30;

/// Progress bar over a completion percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressIndicator {
    percentage: u8,
    width: usize,
}

impl ProgressIndicator {
    /// Percentages above 100 are clamped
    pub fn new(percentage: u8) -> Self {
        Self {
            percentage: percentage.min(100),
            width: DEFAULT_WIDTH,
        }
    }

    pub fn from_report(report: &CompletionReport) -> Self {
        Self::new(report.percentage())
    }

    /// Width of the bar in characters (text rendering only)
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// `[##########--------------------]  33%`
    pub fn render_text(&self) -> String {
        let filled = (self.width * self.percentage as usize + 50) / 100;
        format!(
            "[{}{}] {:>3}%",
            "#".repeat(filled),
            "-".repeat(self.width - filled),
            self.percentage
        )
    }

    fn color(&self) -> Color {
        match self.percentage {
            100 => Color::Green,
            0 => Color::DarkGray,
            _ => Color::Yellow,
        }
    }
}

impl Widget for ProgressIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Gauge::default()
            .gauge_style(Style::default().fg(self.color()))
            .percent(u16::from(self.percentage))
            .label(format!("{}% complete", self.percentage))
            .render(area, buf);
    }
}

/// Checklist lines for each completion group
pub fn format_checklist(report: &CompletionReport) -> String {
    CompletionGroup::ALL
        .iter()
        .map(|group| {
            if report.is_group_satisfied(*group) {
                format!("  [x] {}", group)
            } else {
                format!("  [ ] {}: {}", group, group.requirement())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        assert_eq!(
            ProgressIndicator::new(0).width(10).render_text(),
            "[----------]   0%"
        );
        assert_eq!(
            ProgressIndicator::new(33).width(10).render_text(),
            "[###-------]  33%"
        );
        assert_eq!(
            ProgressIndicator::new(67).width(10).render_text(),
            "[#######---]  67%"
        );
        assert_eq!(
            ProgressIndicator::new(100).width(10).render_text(),
            "[##########] 100%"
        );
    }

    #[test]
    fn test_clamps_percentage() {
        assert_eq!(ProgressIndicator::new(250).percentage(), 100);
    }

    #[test]
    fn test_gauge_renders_label() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        ProgressIndicator::new(67).render(area, &mut buf);
        let text: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("67% complete"));
    }

    #[test]
    fn test_checklist() {
        let report = CompletionReport {
            income: true,
            expenses: false,
            goals: true,
        };
        let checklist = format_checklist(&report);
        assert!(checklist.contains("[x] Income"));
        assert!(checklist.contains("[ ] Expenses: Choose at least one expense category"));
        assert!(checklist.contains("[x] Goals"));
    }
}
