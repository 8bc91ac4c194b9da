//! Form definitions backing the console's filter panel.

use thiserror::Error;
use validator::ValidationErrors;

pub mod filter;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid manager id")]
    InvalidManagerId,
}
