use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Upload category.
///
/// Each category owns exactly one storage directory and one URL prefix. Routes
/// resolve a category through the lookup functions below instead of matching
/// substrings of the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Video,
    Document,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Video, Category::Document];

    /// Path segment used by `POST /upload/{slug}`
    pub fn upload_slug(self) -> &'static str {
        match self {
            Category::Video => "video",
            Category::Document => "doc",
        }
    }

    /// Directory name under the upload root
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Video => "videos",
            Category::Document => "docs",
        }
    }

    /// Path segment used by `GET /files/{slug}`
    pub fn listing_slug(self) -> &'static str {
        self.dir_name()
    }

    /// URL prefix under which stored files are served
    pub fn url_prefix(self) -> &'static str {
        match self {
            Category::Video => "/videos",
            Category::Document => "/docs",
        }
    }

    pub fn upload_message(self) -> &'static str {
        match self {
            Category::Video => "Video uploaded successfully",
            Category::Document => "Document uploaded successfully",
        }
    }

    pub fn list_error_message(self) -> &'static str {
        match self {
            Category::Video => "Failed to list videos",
            Category::Document => "Failed to list documents",
        }
    }

    pub fn from_upload_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.upload_slug() == slug)
    }

    pub fn from_listing_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.listing_slug() == slug)
    }

    /// Relative URL at which `filename` is retrievable
    pub fn file_url(self, filename: &str) -> String {
        format!("{}/{}", self.url_prefix(), filename)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Category::Video => write!(f, "video"),
            Category::Document => write!(f, "document"),
        }
    }
}
