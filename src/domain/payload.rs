//! Multipart payload for advert creation.
//!
//! [`encode_payload`] is pure: it produces an ordered list of named fields that the
//! HTTP layer turns into a `multipart/form-data` body. Keeping the fields as data
//! makes the encoding inspectable without a transport.

use crate::domain::draft::{DraftItem, Photo};

/// Value carried by one multipart field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Binary(Photo),
}

/// A named multipart field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        }
    }
}

/// An encoded, immutable creation request body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultipartPayload {
    fields: Vec<Field>,
}

impl MultipartPayload {
    /// Fields in emission order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Text value of the first field with this name.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|field| match &field.value {
            FieldValue::Text(value) if field.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// The photo field, if the draft carried one.
    #[must_use]
    pub fn photo(&self) -> Option<&Photo> {
        self.fields.iter().find_map(|field| match &field.value {
            FieldValue::Binary(photo) if field.name == "photo" => Some(photo),
            _ => None,
        })
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

/// Encodes a draft into the multipart field list expected by the create endpoint.
///
/// Order: `name`, `sale`, `price`, one `tags[i]` field per tag, then `photo` when
/// present. Tags use index-suffixed repeated fields, never a single combined field.
/// Numbers and booleans are stringified (`10`, `10.5`, `true`).
#[must_use]
pub fn encode_payload(draft: &DraftItem) -> MultipartPayload {
    let mut fields = Vec::with_capacity(draft.tags.len() + 4);

    fields.push(Field::text("name", draft.name.clone()));
    fields.push(Field::text("sale", draft.sale.to_string()));
    fields.push(Field::text("price", draft.price.to_string()));

    for (index, tag) in draft.tags.iter().enumerate() {
        fields.push(Field::text(format!("tags[{index}]"), tag.clone()));
    }

    if let Some(photo) = &draft.photo {
        fields.push(Field {
            name: "photo".to_string(),
            value: FieldValue::Binary(photo.clone()),
        });
    }

    MultipartPayload { fields }
}
