//! Food Item Entity
//!
//! One menu entry exactly as the backend stores it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::draft::normalize_description;
use super::error::{FormError, FormResult};

/// Backend-assigned identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price as it was submitted.
///
/// The backend hands back whatever it was given, so a price may be a JSON
/// string or a JSON number, or `null` when it was never set. Neither form is
/// coerced into another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
    Null,
}

impl Price {
    pub fn is_empty(&self) -> bool {
        match self {
            Price::Number(_) => false,
            Price::Text(text) => text.is_empty(),
            Price::Null => true,
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Price::Text(text)
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::Text(text.to_string())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(number) => write!(f, "{}", number),
            Price::Text(text) => f.write_str(text),
            Price::Null => Ok(()),
        }
    }
}

/// Editable fields shared by the create and edit forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodField {
    Name,
    Price,
    Description,
}

impl FoodField {
    /// Form order
    pub const ALL: [FoodField; 3] = [FoodField::Name, FoodField::Price, FoodField::Description];

    /// Wire and form-control name
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodField::Name => "name",
            FoodField::Price => "price",
            FoodField::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodField::Name => "Food Name",
            FoodField::Price => "Price",
            FoodField::Description => "Description",
        }
    }

    /// Description is free text and gets a multi-line control
    pub fn is_multiline(&self) -> bool {
        matches!(self, FoodField::Description)
    }
}

impl fmt::Display for FoodField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Missing and `null` text both read as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A menu entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: FoodId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Fields the backend adds that the view does not know about.
    /// Carried so an update sends the record back whole.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<Price>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: FoodId::new(id),
            name: name.into(),
            price: price.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }

    /// Current value of a field as the form shows it
    pub fn field(&self, field: FoodField) -> String {
        match field {
            FoodField::Name => self.name.clone(),
            FoodField::Price => self.price.to_string(),
            FoodField::Description => self.description.clone(),
        }
    }

    /// Apply form input. Typed prices become text.
    pub fn set_field(&mut self, field: FoodField, value: String) {
        match field {
            FoodField::Name => self.name = value,
            FoodField::Price => self.price = Price::Text(value),
            FoodField::Description => self.description = value,
        }
    }

    /// Body of an update request: the whole record with its description trimmed
    pub fn to_update(&self) -> FormResult<FoodItem> {
        if self.name.is_empty() {
            return Err(FormError::MissingField(FoodField::Name));
        }
        if self.price.is_empty() {
            return Err(FormError::MissingField(FoodField::Price));
        }
        if self.description.is_empty() {
            return Err(FormError::MissingField(FoodField::Description));
        }
        Ok(FoodItem {
            description: normalize_description(&self.description),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_record() {
        let item: FoodItem = serde_json::from_value(json!({
            "_id": "65a1",
            "name": "Pizza",
            "price": "10",
            "description": "cheese, basil",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(item.id, FoodId::new("65a1"));
        assert_eq!(item.name, "Pizza");
        assert_eq!(item.price, Price::Text("10".to_string()));
        assert_eq!(item.description, "cheese, basil");
        assert_eq!(item.extra.get("__v"), Some(&json!(0)));
    }

    #[test]
    fn test_numeric_price_is_not_coerced() {
        let item: FoodItem = serde_json::from_value(json!({
            "_id": "1",
            "name": "Soup",
            "price": 4.5,
            "description": "tomato"
        }))
        .unwrap();

        assert!(matches!(item.price, Price::Number(_)));
        assert_eq!(item.field(FoodField::Price), "4.5");
        assert_eq!(serde_json::to_value(&item).unwrap()["price"], json!(4.5));
    }

    #[test]
    fn test_null_fields_do_not_drop_the_list() {
        let items: Vec<FoodItem> = serde_json::from_value(json!([
            {"_id": "1", "name": "Pizza", "price": "10", "description": "cheese, basil"},
            {"_id": "2", "name": "Tea", "price": null, "description": "green"},
            {"_id": "3", "name": null, "price": 3, "description": null}
        ]))
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].price, Price::Null);
        assert_eq!(items[1].field(FoodField::Price), "");
        assert_eq!(items[2].name, "");
        assert_eq!(items[2].description, "");
        assert_eq!(serde_json::to_value(&items[1]).unwrap()["price"], json!(null));
    }

    #[test]
    fn test_null_price_must_be_filled_before_update() {
        let mut item = FoodItem::new("2", "Tea", Price::Null, "green");
        assert_eq!(item.to_update(), Err(FormError::MissingField(FoodField::Price)));

        item.set_field(FoodField::Price, "2".to_string());
        assert_eq!(item.to_update().unwrap().price, Price::Text("2".to_string()));
    }

    #[test]
    fn test_update_body_keeps_unknown_fields() {
        let mut item: FoodItem = serde_json::from_value(json!({
            "_id": "1",
            "name": "Pizza",
            "price": "10",
            "description": "cheese, basil",
            "__v": 3
        }))
        .unwrap();
        item.set_field(FoodField::Name, "Calzone".to_string());

        let body = serde_json::to_value(item.to_update().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "_id": "1",
                "name": "Calzone",
                "price": "10",
                "description": "cheese, basil",
                "__v": 3
            })
        );
    }

    #[test]
    fn test_update_trims_but_does_not_split_description() {
        let mut item = FoodItem::new("1", "Pizza", "10", "cheese, basil");
        item.set_field(FoodField::Description, "  cheese, basil \n".to_string());

        let update = item.to_update().unwrap();
        assert_eq!(update.description, "cheese, basil");
    }

    #[test]
    fn test_update_requires_every_field() {
        let mut item = FoodItem::new("1", "Pizza", "10", "cheese");
        item.set_field(FoodField::Price, String::new());

        assert_eq!(item.to_update(), Err(FormError::MissingField(FoodField::Price)));
    }

    #[test]
    fn test_typed_price_replaces_number() {
        let mut item: FoodItem = serde_json::from_value(json!({
            "_id": "1", "name": "Tea", "price": 2, "description": "green"
        }))
        .unwrap();
        item.set_field(FoodField::Price, "2.50".to_string());

        assert_eq!(item.price, Price::Text("2.50".to_string()));
    }
}
