use thiserror::Error;

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

/// Outcome of a rejected directory operation.
///
/// Every variant is reported synchronously to the caller and leaves the
/// directory in its previous state. The `Display` text is what the UI shows
/// in the alert dialog, so it is phrased for the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required field was empty or whitespace-only on submit.
    #[error("Please fill in all the fields.")]
    MissingField,
    /// The submitted employee ID collides with another record.
    #[error("Employee with the same ID already exists.")]
    DuplicateId,
    /// No record with this internal id. Deletes treat this as a no-op;
    /// updates report it, since correct navigation should never get here.
    #[error("No employee record with id {0}.")]
    NotFound(String),
}
