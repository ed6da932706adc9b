//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an accommodation owned by `user_id` together with its location.
///
/// Both rows use fixture defaults. Use the individual factories to customize them.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the owning user
///
/// # Returns
/// - `Ok((accommodation, location))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_accommodation_with_location(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(entity::accommodation::Model, entity::location::Model), DbErr> {
    let accommodation = crate::factory::accommodation::create_accommodation(db, user_id).await?;
    let location = crate::factory::location::create_location(db, accommodation.id).await?;

    Ok((accommodation, location))
}

/// Creates a user plus one accommodation with its location.
///
/// # Returns
/// - `Ok((user, accommodation, location))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_accommodation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::accommodation::Model,
        entity::location::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (accommodation, location) = create_accommodation_with_location(db, user.id).await?;

    Ok((user, accommodation, location))
}
