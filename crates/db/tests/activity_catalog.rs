//! Integration tests for the activity catalog.
//!
//! Exercises destination scoping, name ordering, and the empty-listing case
//! against a real database.

use sqlx::PgPool;
use tripdesk_db::models::activity::CreateActivity;
use tripdesk_db::models::destination::CreateDestination;
use tripdesk_db::repositories::{ActivityRepo, DestinationRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_destination(pool: &PgPool, id: &str, name: &str) {
    DestinationRepo::upsert(
        pool,
        &CreateDestination {
            id: id.to_string(),
            name: name.to_string(),
        },
    )
    .await
    .unwrap();
}

async fn seed_activity(pool: &PgPool, id: &str, destination_id: &str, name: &str) {
    ActivityRepo::create(
        pool,
        &CreateActivity {
            id: id.to_string(),
            destination_id: destination_id.to_string(),
            name: name.to_string(),
            description: None,
            price_cents: Some(2500),
        },
    )
    .await
    .unwrap();
}

async fn seed_catalog(pool: &PgPool) {
    seed_destination(pool, "paris", "Paris").await;
    seed_destination(pool, "kyoto", "Kyoto").await;
    seed_activity(pool, "louvre", "paris", "Louvre").await;
    seed_activity(pool, "eiffel", "paris", "Eiffel Tower").await;
    seed_activity(pool, "seine", "paris", "Seine Cruise").await;
    seed_activity(pool, "fushimi", "kyoto", "Fushimi Inari").await;
    seed_activity(pool, "arashiyama", "kyoto", "Arashiyama Bamboo Grove").await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_destination_scopes_and_sorts_by_name(pool: PgPool) {
    seed_catalog(&pool).await;

    let listing = ActivityRepo::list_by_destination(&pool, "paris").await.unwrap();

    assert_eq!(listing.count, 3);
    assert!(listing.activities.iter().all(|a| a.destination_id == "paris"));
    let names: Vec<&str> = listing.activities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Eiffel Tower", "Louvre", "Seine Cruise"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_destination_yields_empty_listing(pool: PgPool) {
    seed_catalog(&pool).await;

    let listing = ActivityRepo::list_by_destination(&pool, "atlantis").await.unwrap();

    assert_eq!(listing.count, 0);
    assert!(listing.activities.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_sorts_by_destination_then_name(pool: PgPool) {
    seed_catalog(&pool).await;

    let listing = ActivityRepo::list_all(&pool).await.unwrap();

    assert_eq!(listing.count, 5);
    let keys: Vec<(&str, &str)> = listing
        .activities
        .iter()
        .map(|a| (a.destination_id.as_str(), a.name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("kyoto", "Arashiyama Bamboo Grove"),
            ("kyoto", "Fushimi Inari"),
            ("paris", "Eiffel Tower"),
            ("paris", "Louvre"),
            ("paris", "Seine Cruise"),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activity_requires_existing_destination(pool: PgPool) {
    let result = ActivityRepo::create(
        &pool,
        &CreateActivity {
            id: "orphan".to_string(),
            destination_id: "nowhere".to_string(),
            name: "Orphan".to_string(),
            description: None,
            price_cents: None,
        },
    )
    .await;

    assert!(result.is_err(), "FK violation expected");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_ids_skips_unknown(pool: PgPool) {
    seed_catalog(&pool).await;

    let ids = vec!["louvre".to_string(), "missing".to_string(), "fushimi".to_string()];
    let found = ActivityRepo::find_by_ids(&pool, &ids).await.unwrap();

    let found_ids: Vec<&str> = found.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(found_ids, vec!["fushimi", "louvre"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_destination_upsert_renames_and_lists_by_name(pool: PgPool) {
    seed_destination(&pool, "paris", "Paris").await;
    seed_destination(&pool, "kyoto", "Kyoto").await;
    seed_destination(&pool, "paris", "Paris, France").await;

    let destinations = DestinationRepo::list(&pool).await.unwrap();

    let names: Vec<&str> = destinations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Kyoto", "Paris, France"]);
}
