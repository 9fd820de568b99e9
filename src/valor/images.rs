use crate::model::Record;

pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_PLACEHOLDER: &str =
    "https://images.pexels.com/photos/8828546/pexels-photo-8828546.jpeg?auto=compress&cs=tinysrgb&w=300&h=200";
/// Same picture at the square size the detail view uses.
pub const DEFAULT_DETAIL_PLACEHOLDER: &str =
    "https://images.pexels.com/photos/8828546/pexels-photo-8828546.jpeg?auto=compress&cs=tinysrgb&w=400&h=400";

/// Turns a record's image field into a displayable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    dir: String,
    placeholder: String,
    detail_placeholder: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_DIR, DEFAULT_PLACEHOLDER)
    }
}

impl ImageResolver {
    pub fn new(dir: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            placeholder: placeholder.into(),
            detail_placeholder: DEFAULT_DETAIL_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_detail_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.detail_placeholder = placeholder.into();
        self
    }

    /// Like [`resolve`](Self::resolve), with the detail-sized placeholder.
    pub fn resolve_detail(&self, record: &Record) -> String {
        self.image_path(record)
            .unwrap_or_else(|| self.detail_placeholder.clone())
    }

    /// `<dir>/<image>`, or the placeholder when the record has no image.
    pub fn resolve(&self, record: &Record) -> String {
        self.image_path(record)
            .unwrap_or_else(|| self.placeholder.clone())
    }

    fn image_path(&self, record: &Record) -> Option<String> {
        let image = record.image.as_deref().map(str::trim).filter(|i| !i.is_empty())?;
        let dir = self.dir.trim_end_matches('/');
        if dir.is_empty() {
            Some(image.to_string())
        } else {
            Some(format!("{}/{}", dir, image))
        }
    }
}
