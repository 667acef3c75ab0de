//! Request routing for the site API.

use std::path::PathBuf;

use termfolio_blog::{load_index, load_post};

use crate::contact::{Mailer, handle_contact};
use crate::http::{HttpRequest, HttpResponse};

const CONTACT_PATH: &str = "/api/contact";
const BLOG_PATH: &str = "/api/blog";

/// Maps requests to the contact and blog handlers.
pub struct Router {
    blog_dir: PathBuf,
    mailer: Box<dyn Mailer + Send>,
}

impl Router {
    pub fn new(blog_dir: impl Into<PathBuf>, mailer: Box<dyn Mailer + Send>) -> Self {
        Self {
            blog_dir: blog_dir.into(),
            mailer,
        }
    }

    /// Produce the response for `req`.
    pub fn route(&mut self, req: &HttpRequest) -> HttpResponse {
        let path = req.path.trim_end_matches('/');

        if path == CONTACT_PATH {
            if req.method != "POST" {
                return method_not_allowed(req);
            }
            let reply = handle_contact(&req.body, self.mailer.as_mut());
            return HttpResponse::json(reply.status, &reply.body);
        }

        if path == BLOG_PATH {
            if req.method != "GET" {
                return method_not_allowed(req);
            }
            return HttpResponse::json(200, &load_index(&self.blog_dir));
        }

        if let Some(slug) = path.strip_prefix(BLOG_PATH).and_then(|p| p.strip_prefix('/')) {
            if req.method != "GET" {
                return method_not_allowed(req);
            }
            return match load_post(&self.blog_dir, slug) {
                Ok(post) => HttpResponse::json(200, &post),
                Err(e) => HttpResponse::message(e.status(), &e.to_string()),
            };
        }

        log::debug!("No route for {} {}", req.method, req.path);
        HttpResponse::message(404, "Not found")
    }
}

fn method_not_allowed(req: &HttpRequest) -> HttpResponse {
    log::debug!("Method {} not allowed on {}", req.method, req.path);
    HttpResponse::message(405, "Method not allowed")
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("blog_dir", &self.blog_dir)
            .finish_non_exhaustive()
    }
}
