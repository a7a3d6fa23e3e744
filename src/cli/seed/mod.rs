//! Seed command - replaces the user collection with sample data

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::user::CreateUserRequest;

const SAMPLE_USERS: &[(&str, &str, &str, &str)] = &[
    ("John Doe", "john@example.com", "New York", "NY"),
    ("Jane Smith", "jane@example.com", "Los Angeles", "CA"),
    ("Alice Johnson", "alice@example.com", "Chicago", "IL"),
    ("Bob Brown", "bob@example.com", "New York", "NY"),
    ("Charlie Davis", "charlie@example.com", "Austin", "TX"),
    ("Eve Wilson", "eve@example.com", "San Jose", "CA"),
    ("Frank Miller", "frank@example.com", "Seattle", "WA"),
    ("Grace Taylor", "grace@example.com", "Boston", "MA"),
    ("Hank Thomas", "hank@example.com", "Houston", "TX"),
    ("Ivy Martinez", "ivy@example.com", "San Diego", "CA"),
    ("Jack White", "jack@example.com", "Phoenix", "AZ"),
    ("Kelly Green", "kelly@example.com", "Portland", "OR"),
    ("Liam Hall", "liam@example.com", "Miami", "FL"),
    ("Mia Young", "mia@example.com", "New York", "NY"),
    ("Noah King", "noah@example.com", "Atlanta", "GA"),
    ("Olivia Scott", "olivia@example.com", "Denver", "CO"),
    ("Paul Adams", "paul@example.com", "Dallas", "TX"),
    ("Quinn Baker", "quinn@example.com", "San Francisco", "CA"),
    ("Ryan Clark", "ryan@example.com", "Chicago", "IL"),
    ("Sara Lewis", "sara@example.com", "Los Angeles", "CA"),
];

/// Wipe the collection and insert the sample users.
///
/// Goes through the service layer so the usual validation applies and
/// the store assigns ids and timestamps.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config).await?;

    let existing = state.user_service.list().await?;
    for user in &existing {
        state.user_service.delete(&user.id().to_string()).await?;
    }
    info!("Cleared {} existing users", existing.len());

    for (name, email, city, st) in SAMPLE_USERS {
        state
            .user_service
            .create(CreateUserRequest {
                name: Some((*name).to_string()),
                email: Some((*email).to_string()),
                city: Some((*city).to_string()),
                state: Some((*st).to_string()),
            })
            .await?;
    }
    info!("Seeded {} users", SAMPLE_USERS.len());

    Ok(())
}
