//! Blog content loaded from markdown files with YAML front matter.
//!
//! Each `<slug>.md` file under the blog directory is one post. The index
//! skips posts without a title or date; the per-post loader reports them as
//! errors carrying an HTTP status.

mod front_matter;
mod loader;

pub use front_matter::{FrontMatter, split_front_matter};
pub use loader::{BlogError, BlogIndex, PostData, PostMetadata, load_index, load_post};
