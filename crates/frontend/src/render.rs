//! Status page rendering.

use std::fmt::Write;
use std::str::FromStr;

use domain::{PAGE_TITLE, USERS_LOADING};

use crate::page::PageState;

/// Output format for a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
}

impl RenderFormat {
    /// Render the page state in this format.
    pub fn render(self, state: &PageState) -> String {
        match self {
            RenderFormat::Text => render_text(state),
            RenderFormat::Html => render_html(state),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(RenderFormat::Text),
            "html" => Ok(RenderFormat::Html),
            other => Err(format!("unknown format '{}', expected text or html", other)),
        }
    }
}

/// Plain-text rendering for terminals.
pub fn render_text(state: &PageState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", PAGE_TITLE);
    let _ = writeln!(out, "Backend Status: {}", state.status);
    let _ = writeln!(out);
    let _ = writeln!(out, "Users");

    if state.loading {
        let _ = writeln!(out, "{}", USERS_LOADING);
    } else {
        for user in &state.users {
            let _ = writeln!(out, "  - {}", user.display_line());
        }
    }
    out
}

/// HTML fragment equivalent to the text rendering.
pub fn render_html(state: &PageState) -> String {
    let mut out = String::new();
    out.push_str("<div style=\"padding: 20px; font-family: Arial, sans-serif\">\n");
    let _ = writeln!(out, "  <h1>{}</h1>", escape(PAGE_TITLE));
    let _ = writeln!(
        out,
        "  <p><strong>Backend Status:</strong> {}</p>",
        escape(&state.status)
    );
    out.push_str("  <h2>Users</h2>\n");

    if state.loading {
        let _ = writeln!(out, "  <p>{}</p>", escape(USERS_LOADING));
    } else {
        out.push_str("  <ul>\n");
        for user in &state.users {
            let _ = writeln!(
                out,
                "    <li data-id=\"{}\">{}</li>",
                user.id,
                escape(&user.display_line())
            );
        }
        out.push_str("  </ul>\n");
    }
    out.push_str("</div>\n");
    out
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use domain::User;

    use super::*;

    fn loaded(users: Vec<User>) -> PageState {
        PageState {
            status: "Backend is running".to_string(),
            users,
            loading: false,
        }
    }

    #[test]
    fn text_lists_one_line_per_user() {
        let state = loaded(vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ]);
        let text = render_text(&state);

        assert!(text.contains("Backend Status: Backend is running"));
        assert!(text.contains("  - Alice - alice@example.com"));
        assert_eq!(text.matches("  - ").count(), 2);
        assert!(!text.contains(USERS_LOADING));
    }

    #[test]
    fn html_escapes_user_content() {
        let state = loaded(vec![User::new(1, "<script>", "a&b@example.com")]);
        let html = render_html(&state);

        assert!(html.contains("&lt;script&gt; - a&amp;b@example.com"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn html_shows_placeholder_while_loading() {
        let state = PageState {
            status: "Loading...".to_string(),
            users: Vec::new(),
            loading: true,
        };
        let html = render_html(&state);

        assert!(html.contains("<p>Loading users...</p>"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("HTML".parse::<RenderFormat>(), Ok(RenderFormat::Html));
        assert_eq!("text".parse::<RenderFormat>(), Ok(RenderFormat::Text));
        assert!("pdf".parse::<RenderFormat>().is_err());
    }
}
