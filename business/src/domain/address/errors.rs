#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address.field_empty")]
    FieldEmpty { field: &'static str },
    #[error("address.invalid_pincode")]
    InvalidPincode,
    #[error("address.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
