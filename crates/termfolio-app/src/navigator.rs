//! Page navigation for the terminal front end.
//!
//! Navigating replaces the current page and queues its rendered lines for
//! the display to pick up after the command finishes.

use std::path::PathBuf;

use termfolio_blog::load_index;
use termfolio_terminal::Navigator;
use termfolio_terminal::paths::{ROOT_PATH, children};
use termfolio_types::error::{Result, TermfolioError};

/// Navigator backed by the built-in page set and the blog directory.
#[derive(Debug)]
pub struct SiteNavigator {
    blog_dir: PathBuf,
    contact_addr: String,
    current: String,
    pending: Option<Vec<String>>,
}

impl SiteNavigator {
    pub fn new(blog_dir: impl Into<PathBuf>, contact_addr: impl Into<String>) -> Self {
        Self {
            blog_dir: blog_dir.into(),
            contact_addr: contact_addr.into(),
            current: ROOT_PATH.to_string(),
            pending: None,
        }
    }

    /// Path of the page on display.
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Lines of the page navigated to since the last call, if any.
    pub fn take_rendered(&mut self) -> Option<Vec<String>> {
        self.pending.take()
    }

    fn render(&self, path: &str) -> Option<Vec<String>> {
        let lines = match path {
            ROOT_PATH => {
                let mut lines = vec!["# Home".to_string()];
                lines.extend(children(ROOT_PATH).iter().map(|c| format!("  /{c}")));
                lines
            },
            "/about" => vec![
                "# About".to_string(),
                "Developer who likes terminals, type systems and small tools.".to_string(),
            ],
            "/projects" => vec![
                "# Projects".to_string(),
                "  termfolio    this site".to_string(),
            ],
            "/blog" => self.render_blog(),
            "/contact" => vec![
                "# Contact".to_string(),
                format!("POST a JSON form to http://{}/api/contact", self.contact_addr),
                "Fields: name, email, subject, message".to_string(),
            ],
            _ => return None,
        };
        Some(lines)
    }

    fn render_blog(&self) -> Vec<String> {
        let index = load_index(&self.blog_dir);
        let mut lines = vec!["# Blog".to_string()];
        if index.posts.is_empty() {
            lines.push("No posts yet.".to_string());
            return lines;
        }
        for post in &index.posts {
            let tags = if post.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", post.tags.join(", "))
            };
            lines.push(format!("  {}  {}{tags}", post.date, post.title));
            if !post.excerpt.is_empty() {
                lines.push(format!("      {}", post.excerpt));
            }
        }
        lines.push(String::new());
        lines.push(format!("Tags: {}", index.all_tags.join(", ")));
        lines
    }
}

impl Navigator for SiteNavigator {
    fn goto(&mut self, path: &str) -> Result<()> {
        let page = self
            .render(path)
            .ok_or_else(|| TermfolioError::Navigation(format!("no page at {path}")))?;
        log::debug!("Navigated {} -> {path}", self.current);
        self.current = path.to_string();
        self.pending = Some(page);
        Ok(())
    }
}
