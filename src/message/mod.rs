//! Validation message presentation
//!
//! Turns zero, one or many error strings into an optional alert region.
//! Blank entries are dropped; if nothing survives, nothing is rendered.

pub mod widget;

use std::fmt;

/// Accessibility role of a rendered message region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Alert,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
        }
    }
}

/// How assistive technology announces changes to the region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveSetting {
    /// Announced once the user is idle, without interrupting
    Polite,
}

impl LiveSetting {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
        }
    }
}

/// Body of a rendered region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertBody {
    /// A single message, shown as plain text
    Text(String),
    /// Two or more messages, shown as an ordered list
    List(Vec<String>),
}

/// A rendered message region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRegion {
    /// Stable id the caller uses to tie the region to its input
    pub id: String,
    pub role: Role,
    pub live: LiveSetting,
    pub body: AlertBody,
}

impl AlertRegion {
    /// The messages in display order
    pub fn messages(&self) -> Vec<&str> {
        match &self.body {
            AlertBody::Text(text) => vec![text.as_str()],
            AlertBody::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Markup for embedding in a page
    pub fn to_html(&self) -> String {
        let inner = match &self.body {
            AlertBody::Text(text) => escape_html(text),
            AlertBody::List(items) => {
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", escape_html(item)))
                    .collect();
                format!("<ol>{}</ol>", items)
            }
        };
        format!(
            r#"<div id="{}" role="{}" aria-live="{}">{}</div>"#,
            escape_html(&self.id),
            self.role.as_str(),
            self.live.as_str(),
            inner
        )
    }
}

impl fmt::Display for AlertRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            AlertBody::Text(text) => write!(f, "{}", text),
            AlertBody::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}. {}", i + 1, item)?;
                }
                Ok(())
            }
        }
    }
}

/// One or more validation messages waiting to be rendered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationMessage {
    id: String,
    messages: Vec<String>,
    visible: bool,
}

impl ValidationMessage {
    /// Create an empty, visible message slot with a stable id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
            visible: true,
        }
    }

    /// Set a single message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages = vec![message.into()];
        self
    }

    /// Set several messages
    pub fn messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Set an optional message; `None` clears the slot
    pub fn maybe_message(mut self, message: Option<impl Into<String>>) -> Self {
        self.messages = message.into_iter().map(Into::into).collect();
        self
    }

    /// Show or hide the region
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render the region, or `None` when there is nothing to show
    pub fn render(&self) -> Option<AlertRegion> {
        if !self.visible {
            return None;
        }

        let mut kept: Vec<String> = self
            .messages
            .iter()
            .filter(|m| !m.trim().is_empty())
            .cloned()
            .collect();

        let body = match kept.len() {
            0 => return None,
            1 => AlertBody::Text(kept.remove(0)),
            _ => AlertBody::List(kept),
        };

        Some(AlertRegion {
            id: self.id.clone(),
            role: Role::Alert,
            live: LiveSetting::Polite,
            body,
        })
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_inputs_render_nothing() {
        assert!(ValidationMessage::new("f").render().is_none());
        assert!(ValidationMessage::new("f").message("").render().is_none());
        assert!(ValidationMessage::new("f").message("   ").render().is_none());
        assert!(ValidationMessage::new("f")
            .messages(Vec::<String>::new())
            .render()
            .is_none());
        assert!(ValidationMessage::new("f")
            .messages([" ", "\t", ""])
            .render()
            .is_none());
        assert!(ValidationMessage::new("f")
            .maybe_message(None::<String>)
            .render()
            .is_none());
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let message = ValidationMessage::new("f").message("Required").visible(false);
        assert!(message.render().is_none());
    }

    #[test]
    fn test_single_message_is_plain_text() {
        let region = ValidationMessage::new("name-error")
            .message("Required")
            .render()
            .unwrap();
        assert_eq!(region.body, AlertBody::Text("Required".into()));
        assert_eq!(region.id, "name-error");
        assert_eq!(region.role, Role::Alert);
        assert_eq!(region.live, LiveSetting::Polite);
    }

    #[test]
    fn test_blank_entries_filtered_in_order() {
        let region = ValidationMessage::new("f")
            .messages(["A", "", "B"])
            .render()
            .unwrap();
        assert_eq!(region.body, AlertBody::List(vec!["A".into(), "B".into()]));
        assert_eq!(region.messages(), vec!["A", "B"]);
    }

    #[test]
    fn test_one_survivor_of_many_is_plain_text() {
        let region = ValidationMessage::new("f")
            .messages(["  ", "Only"])
            .render()
            .unwrap();
        assert_eq!(region.body, AlertBody::Text("Only".into()));
    }

    #[test]
    fn test_html_output() {
        let single = ValidationMessage::new("amount-error")
            .message("Must be > 0")
            .render()
            .unwrap();
        assert_eq!(
            single.to_html(),
            r#"<div id="amount-error" role="alert" aria-live="polite">Must be &gt; 0</div>"#
        );

        let list = ValidationMessage::new("x").messages(["A", "B"]).render().unwrap();
        assert_eq!(
            list.to_html(),
            r#"<div id="x" role="alert" aria-live="polite"><ol><li>A</li><li>B</li></ol></div>"#
        );
    }

    #[test]
    fn test_display_numbers_list_items() {
        let region = ValidationMessage::new("x").messages(["A", "B"]).render().unwrap();
        assert_eq!(region.to_string(), "1. A\n2. B");
    }
}
