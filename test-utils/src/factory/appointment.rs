//! Appointment factory for creating test appointment rows.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// The referenced patient and dentist must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, patient.id, dentist.id)
///     .description("Root canal")
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    patient_id: i32,
    dentist_id: i32,
    date: NaiveDate,
    hour: NaiveTime,
    description: String,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - date: 2024-03-10
    /// - hour: 10:30:00
    /// - description: `"Appointment {id}"`
    pub fn new(db: &'a DatabaseConnection, patient_id: i32, dentist_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            patient_id,
            dentist_id,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap_or_default(),
            hour: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or_default(),
            description: format!("Appointment {}", id),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn hour(mut self, hour: NaiveTime) -> Self {
        self.hour = hour;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the appointment row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            date: ActiveValue::Set(self.date),
            hour: ActiveValue::Set(self.hour),
            description: ActiveValue::Set(self.description),
            patient_id: ActiveValue::Set(self.patient_id),
            dentist_id: ActiveValue::Set(self.dentist_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an appointment with default values between an existing patient and dentist.
pub async fn create_appointment(
    db: &DatabaseConnection,
    patient_id: i32,
    dentist_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, patient_id, dentist_id)
        .build()
        .await
}
