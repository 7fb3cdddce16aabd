use nyumba_store::{AppConfig, DataService, Property, PropertyFilter, Role};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Nyumba Store - Local-first listing repository");
    info!("==========================================");
    info!("");

    // Load config (falls back to defaults when nyumba.json is absent)
    let config = AppConfig::load_or_default("nyumba.json")?;
    let service = DataService::new(&config)?;

    if service.has_remote_backend() {
        info!("Remote backend configured; local repository remains the fallback");
    } else {
        info!("No remote backend configured, serving from local repository");
    }
    info!("");

    // Display current listings
    let properties = service.get_properties(&PropertyFilter::default()).await?;
    info!("✅ {} listings in the store\n", properties.len());

    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.price);
        println!(
            "   {} bed, {} bath, {}",
            property.bedrooms, property.bathrooms, property.area
        );
        if let Some(county) = &property.address.county {
            println!("   County: {}", county);
        }
        println!("   ID: {}", property.id);
        println!();
    }

    // Register a demo landlord and list one property for them
    let landlord = match service.find_user_by_email("demo@nyumba.ke").await {
        Some(user) => user,
        None => {
            service
                .register_user("Demo Landlord", "demo@nyumba.ke", "demo-pass", Role::Landlord)
                .await?
        }
    };

    let listed = service
        .add_or_update_property(Property {
            title: "1BR Apartment, Nyali".to_string(),
            price: "KES 55,000".to_string(),
            bedrooms: 1,
            bathrooms: 1.0,
            area: "52 sqm".to_string(),
            owner: Some(landlord.id.clone()),
            ..Property::default()
        })
        .await?;
    info!("Listed '{}' with id {}", listed.title, listed.id);

    // Save it for the landlord and log the activity
    service
        .save_property_for_user(&landlord.id, &listed.id)
        .await?;
    let saved = service.list_saved_for_user(&landlord.id).await?;
    info!("{} saved listing(s) for {}", saved.len(), landlord.name);

    service
        .log_event(json!({
            "type": "property_listed",
            "property_id": listed.id,
            "user_id": landlord.id,
        }))
        .await?;

    // Export the full listing set
    let all = service.get_properties(&PropertyFilter::default()).await?;
    let export = serde_json::to_string_pretty(&all)?;
    tokio::fs::write("listings_export.json", export).await?;
    info!("💾 Exported {} listings to listings_export.json", all.len());

    Ok(())
}
