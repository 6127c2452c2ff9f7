//! Create-Form Draft
//!
//! Transient, client-only state for an item that does not exist yet.

use serde::Serialize;

use super::error::{FormError, FormResult};
use super::food::{FoodField, Price};

/// Surrounding whitespace is dropped; commas and everything between them
/// are kept verbatim. Both forms submit descriptions through this.
pub fn normalize_description(description: &str) -> String {
    description.trim().to_string()
}

/// Create-form state, one string per form control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodDraft {
    pub fn get(&self, field: FoodField) -> &str {
        match field {
            FoodField::Name => &self.name,
            FoodField::Price => &self.price,
            FoodField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FoodField, value: String) {
        match field {
            FoodField::Name => self.name = value,
            FoodField::Price => self.price = value,
            FoodField::Description => self.description = value,
        }
    }

    /// First control left empty, in form order
    pub fn missing_field(&self) -> Option<FoodField> {
        FoodField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// Body of a create request
    pub fn to_new_food(&self) -> FormResult<NewFood> {
        if let Some(field) = self.missing_field() {
            return Err(FormError::MissingField(field));
        }
        Ok(NewFood {
            name: self.name.clone(),
            price: Price::Text(self.price.clone()),
            description: normalize_description(&self.description),
        })
    }
}

/// `POST /foods` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFood {
    pub name: String,
    pub price: Price,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn burger() -> FoodDraft {
        FoodDraft {
            name: "Burger".to_string(),
            price: "5.99".to_string(),
            description: " melted cheese , lettuce ".to_string(),
        }
    }

    #[test]
    fn test_create_body_trims_description_only() {
        let body = serde_json::to_value(burger().to_new_food().unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Burger",
                "price": "5.99",
                "description": "melted cheese , lettuce"
            })
        );
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let mut draft = FoodDraft::default();
        assert_eq!(draft.missing_field(), Some(FoodField::Name));

        draft.set(FoodField::Name, "Burger".to_string());
        draft.set(FoodField::Description, "beef".to_string());
        assert_eq!(
            draft.to_new_food(),
            Err(FormError::MissingField(FoodField::Price))
        );
    }

    #[test]
    fn test_get_reflects_set() {
        let mut draft = FoodDraft::default();
        draft.set(FoodField::Price, "7".to_string());

        assert_eq!(draft.get(FoodField::Price), "7");
        assert_eq!(draft.get(FoodField::Name), "");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_description("\t a ,  b \n"), "a ,  b");
    }
}
