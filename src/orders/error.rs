use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    /// Connection or query failure against the order store
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The insert reported success but returned no row
    #[error("Failed to create order.")]
    NotPersisted,

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

pub type OrderResult<T> = Result<T, OrderError>;
