/// Where an attached photo currently lives. An object URL from the browser
/// only works for the current session; a record is only durable once it
/// points at a persisted URL, so the two are kept apart in the type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageRef {
    /// Session-local object URL used for the form preview.
    Ephemeral(String),
    /// Server-assigned URL that survives the session.
    Persisted(String),
}

impl ImageRef {
    pub fn url(&self) -> &str {
        match self {
            ImageRef::Ephemeral(url) | ImageRef::Persisted(url) => url,
        }
    }

    /// Only persisted references may be written into an item record.
    pub fn is_persisted(&self) -> bool {
        matches!(self, ImageRef::Persisted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_reference_is_not_durable() {
        let preview = ImageRef::Ephemeral("blob:abc123".into());
        assert!(!preview.is_persisted());
        assert_eq!(preview.url(), "blob:abc123");
    }

    #[test]
    fn persisted_reference_is_durable() {
        let stored = ImageRef::Persisted("/uploads/photo.png".into());
        assert!(stored.is_persisted());
        assert_eq!(stored.url(), "/uploads/photo.png");
    }
}
