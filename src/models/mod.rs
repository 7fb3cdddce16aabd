use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a registered user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tenant,
    Landlord,
    Admin,
}

/// Address of a property listing; every field is optional so partial
/// records from older snapshots still hydrate
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Picked map coordinate for a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Core property listing model
///
/// `price` is the display string exactly as entered ("KES 45,000",
/// "$1,200/month"); `price_numeric` is always re-derived from it on write
/// and never trusted from caller input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Property {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub price: String,
    #[serde(default)]
    pub price_numeric: u64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: f32,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub saved: bool,
}

/// Registered user account
///
/// The password is stored as the opaque string the caller provided; no
/// hashing happens in this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Append-only activity log entry with a free-form payload
///
/// The payload map is flattened on serialization, so a stored event reads
/// as one flat object: `{"id": ..., "ts": ..., "type": "login", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

/// Derive the numeric price from a display string by stripping every
/// non-digit character; an empty or unparsable remainder is 0
pub fn price_to_numeric(price: &str) -> u64 {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_currency_and_separators() {
        assert_eq!(price_to_numeric("KES 45,000"), 45_000);
        assert_eq!(price_to_numeric("$1,200/month"), 1_200);
        assert_eq!(price_to_numeric("90 000 kr"), 90_000);
    }

    #[test]
    fn price_without_digits_is_zero() {
        assert_eq!(price_to_numeric("price on request"), 0);
        assert_eq!(price_to_numeric(""), 0);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Landlord).unwrap(), "\"landlord\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn property_hydrates_from_partial_json() {
        // Seed-era records carry only a handful of fields
        let p: Property = serde_json::from_str(
            r#"{"id":"1","title":"Modern Studio, Westlands","price":"KES 45,000"}"#,
        )
        .unwrap();
        assert_eq!(p.bedrooms, 0);
        assert!(p.images.is_empty());
        assert!(p.location.is_none());
    }

    #[test]
    fn event_payload_flattens() {
        let mut payload = serde_json::Map::new();
        payload.insert("type".into(), Value::String("login".into()));
        let event = Event {
            id: "e-1".into(),
            ts: Utc::now(),
            payload,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "login");
        assert!(json.get("payload").is_none());
    }
}
