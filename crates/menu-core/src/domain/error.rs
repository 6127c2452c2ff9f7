//! Form Errors

use thiserror::Error;

use super::food::FoodField;

/// Result of turning form state into a request body
pub type FormResult<T> = Result<T, FormError>;

/// Why a form could not be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(FoodField),
    #[error("no food item is selected for editing")]
    NothingSelected,
}
