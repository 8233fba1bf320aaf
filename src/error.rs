use thiserror::Error;

/// Client-side failures talking to the item store. The underlying cause is
/// logged where it happens; these variants are what the UI branches on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to fetch items from the store")]
    Fetch,
    #[error("failed to save the report")]
    Write,
    #[error("failed to upload the image")]
    Upload,
}

/// Local form validation failures. Recoverable; nothing has been sent when
/// one of these is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
