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

/// Creates a patient, a dentist and an appointment between them.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok((patient, dentist, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::patient::Model,
        entity::dentist::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let patient = crate::factory::patient::create_patient(db).await?;
    let dentist = crate::factory::dentist::create_dentist(db).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, patient.id, dentist.id).await?;

    Ok((patient, dentist, appointment))
}
