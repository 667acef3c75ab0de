//! Post index and per-post loading.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::front_matter::FrontMatter;

/// Summary of a post for the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMetadata {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub slug: String,
}

/// A full post with its raw markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub content: String,
    pub slug: String,
}

/// Every listable post, newest first, with the union of their tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogIndex {
    pub posts: Vec<PostMetadata>,
    pub all_tags: Vec<String>,
}

/// Failure to load a single post.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Post not found")]
    NotFound,

    #[error("Post metadata is incomplete")]
    Incomplete,

    #[error("Failed to load post: {0}")]
    Load(String),
}

impl BlogError {
    /// HTTP status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Incomplete | Self::Load(_) => 500,
        }
    }
}

/// Sort key for a front matter date. Unparseable dates sort as oldest.
fn date_key(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    DateTime::parse_from_rfc3339(date)
        .map(|d| d.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Read every `*.md` post under `dir`.
///
/// A missing directory yields an empty index with a warning. Posts without
/// a title or date, and files that cannot be read or parsed, are skipped.
pub fn load_index(dir: &Path) -> BlogIndex {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "Blog content directory not found at {}. No posts loaded.",
                dir.display()
            );
            return BlogIndex::default();
        },
        Err(e) => {
            log::error!("Error reading blog posts: {e}");
            return BlogIndex::default();
        },
    };

    let mut posts = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let filename = entry.file_name().to_string_lossy().into_owned();

        let text = match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) => {
                log::error!("Skipping {filename}: {e}");
                continue;
            },
        };
        let matter = match FrontMatter::parse(&text) {
            Ok((matter, _)) => matter,
            Err(e) => {
                log::error!("Skipping {filename}: {e}");
                continue;
            },
        };
        if !matter.has_required() {
            log::warn!("Skipping {filename}: missing title or date in frontmatter.");
            continue;
        }

        posts.push(PostMetadata {
            title: matter.title.unwrap_or_default(),
            date: matter.date.unwrap_or_default(),
            tags: matter.tags,
            excerpt: matter.excerpt.unwrap_or_default(),
            slug: slug.to_string(),
        });
    }

    posts.sort_by(|a, b| a.slug.cmp(&b.slug));
    posts.sort_by_key(|p| Reverse(date_key(&p.date)));

    let all_tags: BTreeSet<String> = posts.iter().flat_map(|p| p.tags.iter().cloned()).collect();
    log::debug!("Loaded {} blog posts", posts.len());

    BlogIndex {
        posts,
        all_tags: all_tags.into_iter().collect(),
    }
}

/// Load the post stored as `<dir>/<slug>.md`.
pub fn load_post(dir: &Path, slug: &str) -> Result<PostData, BlogError> {
    if slug.is_empty() || slug.contains(['/', '\\']) || slug.starts_with('.') {
        return Err(BlogError::NotFound);
    }
    let path = dir.join(format!("{slug}.md"));
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(BlogError::NotFound),
        Err(e) => {
            log::error!("Error loading post {slug}: {e}");
            return Err(BlogError::Load(e.to_string()));
        },
    };

    let (matter, body) = FrontMatter::parse(&text).map_err(|e| {
        log::error!("Error loading post {slug}: {e}");
        BlogError::Load(e.to_string())
    })?;
    if !matter.has_required() {
        log::warn!("Post {slug}.md is missing title or date.");
        return Err(BlogError::Incomplete);
    }

    Ok(PostData {
        title: matter.title.unwrap_or_default(),
        date: matter.date.unwrap_or_default(),
        tags: matter.tags,
        content: body.to_string(),
        slug: slug.to_string(),
    })
}
