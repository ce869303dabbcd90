/// Error enumeration shared by the persistence traits.
///
/// The hosted backend is an external collaborator; every repository trait in
/// this crate surfaces its failures through this type so callers can decide
/// between surfacing and degrading.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
