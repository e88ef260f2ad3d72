//! Resource schemas: entities as stored and returned, plus their create
//! payloads. Constructors assign the server-generated fields (`id`,
//! `createdAt`/`timestamp`); anything the client sends for those is ignored
//! because the create payloads simply do not carry them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Diagnostic/heartbeat record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    pub fn new(input: StatusCheckCreate) -> Self {
        Self {
            id: new_id(),
            client_name: input.client_name,
            timestamp: Utc::now(),
        }
    }
}

/// A vehicle-for-sale record, the primary marketplace entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Mileage in kilometers.
    pub km: i64,
    /// Powertrain description, e.g. "1.8L".
    pub engine: String,
    pub price: i64,
    pub city: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCreate {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: i64,
    pub engine: String,
    pub price: i64,
    pub city: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Listing {
    pub fn new(input: ListingCreate) -> Self {
        Self {
            id: new_id(),
            brand: input.brand,
            model: input.model,
            year: input.year,
            km: input.km,
            engine: input.engine,
            price: input.price,
            city: input.city,
            image_url: input.image_url,
            created_at: Utc::now(),
        }
    }
}

/// Write-only: persisted on submission, no read endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactMessageCreate {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn new(input: ContactMessageCreate) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            created_at: Utc::now(),
        }
    }
}

/// Write-only: a request to import a vehicle, persisted on submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub id: String,
    pub brand_model: String,
    pub year_min: Option<i32>,
    pub engine: Option<String>,
    pub trim: Option<String>,
    pub budget_max: Option<i64>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequestCreate {
    pub brand_model: String,
    #[serde(default)]
    pub year_min: Option<i32>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub trim: Option<String>,
    #[serde(default)]
    pub budget_max: Option<i64>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

impl ImportRequest {
    pub fn new(input: ImportRequestCreate) -> Self {
        Self {
            id: new_id(),
            brand_model: input.brand_model,
            year_min: input.year_min,
            engine: input.engine,
            trim: input.trim,
            budget_max: input.budget_max,
            contact_name: input.contact_name,
            contact_email: input.contact_email,
            contact_phone: input.contact_phone,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_are_unique() {
        let a = StatusCheck::new(StatusCheckCreate {
            client_name: "probe".into(),
        });
        let b = StatusCheck::new(StatusCheckCreate {
            client_name: "probe".into(),
        });
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn listing_wire_fields_are_camel_case() {
        let listing = Listing::new(
            serde_json::from_value(json!({
                "brand": "Toyota",
                "model": "Corolla",
                "year": 2019,
                "km": 50000,
                "engine": "1.8L",
                "price": 12000,
                "city": "Casablanca",
                "imageUrl": "https://img.example/corolla.jpg"
            }))
            .unwrap(),
        );
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["imageUrl"], "https://img.example/corolla.jpg");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn listing_create_ignores_server_fields() {
        let input: ListingCreate = serde_json::from_value(json!({
            "id": "client-chosen",
            "createdAt": "2020-01-01T00:00:00Z",
            "brand": "Dacia",
            "model": "Logan",
            "year": 2021,
            "km": 30000,
            "engine": "1.5 dCi",
            "price": 95000,
            "city": "Rabat"
        }))
        .unwrap();
        let listing = Listing::new(input);
        assert_ne!(listing.id, "client-chosen");
    }

    #[test]
    fn listing_create_requires_typed_integers() {
        let result = serde_json::from_value::<ListingCreate>(json!({
            "brand": "Toyota",
            "model": "Corolla",
            "year": "2019",
            "km": 50000,
            "engine": "1.8L",
            "price": 12000,
            "city": "Casablanca"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn import_request_optionals_default_to_none() {
        let input: ImportRequestCreate =
            serde_json::from_value(json!({ "brandModel": "Audi A3" })).unwrap();
        let req = ImportRequest::new(input);
        assert_eq!(req.brand_model, "Audi A3");
        assert!(req.year_min.is_none());
        assert!(req.budget_max.is_none());
    }
}
