use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("invalid slug: {0}")]
    InvalidSlug(String),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("end time is before start time")]
    InvalidTimeRange,
}

pub(crate) const TITLE_MAX: usize = 200;
pub(crate) const SUMMARY_MAX: usize = 500;

/// Trimmed, non-empty, length-bounded text.
pub(crate) fn required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ContentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContentError::Empty(field));
    }
    if trimmed.chars().count() > max {
        return Err(ContentError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|val| !val.is_empty())
        .map(str::to_owned)
}

pub(crate) fn required_url(field: &'static str, value: &str) -> Result<String, ContentError> {
    let trimmed = required(field, value, 2048)?;
    Url::parse(&trimmed).map_err(|_| ContentError::InvalidUrl {
        field,
        value: trimmed.clone(),
    })?;
    Ok(trimmed)
}

pub(crate) fn optional_url(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ContentError> {
    optional(value)
        .map(|raw| required_url(field, &raw))
        .transpose()
}

/// Lowercase, dash-separated form of a title.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

pub(crate) fn validate_slug(slug: &str) -> Result<String, ContentError> {
    let valid = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(slug.to_owned())
    } else {
        Err(ContentError::InvalidSlug(slug.to_owned()))
    }
}

pub(crate) fn validate_email(value: &str) -> Result<String, ContentError> {
    let trimmed = value.trim().to_ascii_lowercase();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ContentError::InvalidEmail(trimmed));
    };
    let ok = !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !trimmed.contains(char::is_whitespace);
    if ok {
        Ok(trimmed)
    } else {
        Err(ContentError::InvalidEmail(trimmed))
    }
}
