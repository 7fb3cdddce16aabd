use tracing::info;

use crate::models::{Address, Property};
use crate::store::errors::Result;
use crate::store::repository::LocalRepository;

/// Seed demonstration listings when the property collection is empty
///
/// Runs only at a count of exactly zero, so reopening a populated store
/// never duplicates the demo set.
pub fn seed_if_empty(repo: &mut LocalRepository) -> Result<()> {
    if repo.property_count() > 0 {
        return Ok(());
    }
    info!("Empty property store, seeding demonstration listings");
    for property in demo_properties() {
        repo.upsert_property(property)?;
    }
    Ok(())
}

/// Fixed demonstration listings shown before any user adds data
pub fn demo_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern Studio, Westlands".to_string(),
            price: "KES 45,000".to_string(),
            bedrooms: 0,
            bathrooms: 1.0,
            area: "40 sqm".to_string(),
            address: Address {
                city: Some("Nairobi".to_string()),
                county: Some("Nairobi".to_string()),
                region: None,
            },
            images: vec![
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267".to_string(),
            ],
            ..Property::default()
        },
        Property {
            id: "2".to_string(),
            title: "2BR Apartment, Kilimani".to_string(),
            price: "KES 90,000".to_string(),
            bedrooms: 2,
            bathrooms: 2.0,
            area: "85 sqm".to_string(),
            address: Address {
                city: Some("Nairobi".to_string()),
                county: Some("Nairobi".to_string()),
                region: None,
            },
            images: vec![
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688".to_string(),
            ],
            ..Property::default()
        },
        Property {
            id: "3".to_string(),
            title: "3BR House, Mombasa".to_string(),
            price: "KES 120,000".to_string(),
            bedrooms: 3,
            bathrooms: 2.0,
            area: "140 sqm".to_string(),
            address: Address {
                city: Some("Mombasa".to_string()),
                county: Some("Mombasa".to_string()),
                region: None,
            },
            images: vec![
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994".to_string(),
            ],
            ..Property::default()
        },
    ]
}
