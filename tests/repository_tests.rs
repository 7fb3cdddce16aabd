// Integration tests for the local repository: filtering, upserts, and
// persistence across reopen.

use nyumba_store::store::{JsonFileStore, LocalRepository, PropertyFilter};
use nyumba_store::{Address, Property};
use tempfile::TempDir;

fn open_repo(dir: &TempDir) -> LocalRepository {
    let store = JsonFileStore::open(dir.path()).unwrap();
    LocalRepository::open(store)
}

fn listing(title: &str, price: &str, bedrooms: u32, county: &str) -> Property {
    Property {
        title: title.to_string(),
        price: price.to_string(),
        bedrooms,
        address: Address {
            county: Some(county.to_string()),
            ..Address::default()
        },
        ..Property::default()
    }
}

fn seed_three(repo: &mut LocalRepository) {
    repo.upsert_property(listing("Studio", "KES 45,000", 0, "Nairobi")).unwrap();
    repo.upsert_property(listing("Apartment", "KES 90,000", 2, "Nairobi")).unwrap();
    repo.upsert_property(listing("House", "KES 120,000", 3, "Mombasa")).unwrap();
}

#[test]
fn upsert_round_trip_appears_in_listing() {
    // Given: a property without an id
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_repo(&dir);

    // When: it is upserted
    let stored = repo
        .upsert_property(Property {
            title: "Loft".to_string(),
            price: "$1,200/month".to_string(),
            bedrooms: 1,
            ..Property::default()
        })
        .unwrap();

    // Then: the listing contains it, with id assigned and price derived
    let all = repo.list_properties(&PropertyFilter::default());
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, stored.id);
    assert!(!all[0].id.is_empty());
    assert_eq!(all[0].price_numeric, 1200);
    assert_eq!(all[0].title, "Loft");
}

#[test]
fn bedrooms_filter_is_a_minimum() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_repo(&dir);
    seed_three(&mut repo);

    let filter = PropertyFilter {
        bedrooms: Some(2),
        ..PropertyFilter::default()
    };
    let matched = repo.list_properties(&filter);

    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|p| p.bedrooms >= 2));
}

#[test]
fn price_bounds_are_inclusive() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_repo(&dir);
    seed_three(&mut repo);

    let filter = PropertyFilter {
        min_price: Some(90_000),
        max_price: Some(120_000),
        ..PropertyFilter::default()
    };
    let matched = repo.list_properties(&filter);

    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].price_numeric, 90_000);
    assert_eq!(matched[1].price_numeric, 120_000);
}

#[test]
fn county_filter_matches_county_or_region() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_repo(&dir);
    seed_three(&mut repo);

    // A listing carrying the county under `region` instead
    repo.upsert_property(Property {
        title: "Cottage".to_string(),
        price: "KES 30,000".to_string(),
        address: Address {
            region: Some("Mombasa".to_string()),
            ..Address::default()
        },
        ..Property::default()
    })
    .unwrap();

    let matched = repo.list_properties(&PropertyFilter::in_county("Mombasa"));
    assert_eq!(matched.len(), 2);
}

#[test]
fn absent_filter_dimensions_place_no_constraint() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_repo(&dir);
    seed_three(&mut repo);

    let all = repo.list_properties(&PropertyFilter::default());
    assert_eq!(all.len(), 3);
}

#[test]
fn listing_order_is_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_repo(&dir);
    seed_three(&mut repo);

    let titles: Vec<String> = repo
        .list_properties(&PropertyFilter::default())
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["Studio", "Apartment", "House"]);
}

#[test]
fn writes_survive_reopen() {
    // Given: a repository with data persisted to disk
    let dir = tempfile::tempdir().unwrap();
    let saved_id;
    {
        let mut repo = open_repo(&dir);
        let stored = repo
            .upsert_property(listing("Studio", "KES 45,000", 0, "Nairobi"))
            .unwrap();
        saved_id = stored.id.clone();
        repo.save_property_for_user("u1", &stored.id).unwrap();
    }

    // When: a fresh repository hydrates from the same store
    let repo = open_repo(&dir);

    // Then: both the listing and the association are back
    let all = repo.list_properties(&PropertyFilter::default());
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, saved_id);
    assert_eq!(repo.list_saved_for_user("u1").len(), 1);
}

#[test]
fn malformed_collection_fails_open_to_empty() {
    // Given: garbage where the property collection should be
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rs_properties.json"), "{{not json").unwrap();

    // When: the repository hydrates
    let repo = open_repo(&dir);

    // Then: it starts empty instead of failing
    assert_eq!(repo.property_count(), 0);
}

#[test]
fn wrong_shape_fails_open_without_losing_other_collections() {
    // Given: one malformed collection next to a healthy one
    let dir = tempfile::tempdir().unwrap();
    {
        let mut repo = open_repo(&dir);
        repo.upsert_property(listing("Studio", "KES 45,000", 0, "Nairobi"))
            .unwrap();
    }
    std::fs::write(dir.path().join("rs_events.json"), "\"not a list\"").unwrap();

    // When: the repository hydrates
    let repo = open_repo(&dir);

    // Then: only the malformed collection resets
    assert_eq!(repo.property_count(), 1);
    assert!(repo.events().is_empty());
}
