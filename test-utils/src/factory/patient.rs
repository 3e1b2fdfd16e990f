//! Patient factory for creating test patient rows.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::patient::PatientFactory;
///
/// let patient = PatientFactory::new(&db)
///     .name("Ana")
///     .dni(30111222)
///     .build()
///     .await?;
/// ```
pub struct PatientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    last_name: String,
    domicilio: String,
    dni: i32,
    email: String,
    admission_date: NaiveDate,
}

impl<'a> PatientFactory<'a> {
    /// Creates a new PatientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Patient {id}"`
    /// - last_name: `"Last {id}"`
    /// - domicilio: `"Street {id}"`
    /// - dni: `10_000_000 + id`
    /// - email: `"patient{id}@example.com"`
    /// - admission_date: 2024-01-15
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Patient {}", id),
            last_name: format!("Last {}", id),
            domicilio: format!("Street {}", id),
            dni: 10_000_000 + id as i32,
            email: format!("patient{}@example.com", id),
            admission_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn domicilio(mut self, domicilio: impl Into<String>) -> Self {
        self.domicilio = domicilio.into();
        self
    }

    pub fn dni(mut self, dni: i32) -> Self {
        self.dni = dni;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn admission_date(mut self, admission_date: NaiveDate) -> Self {
        self.admission_date = admission_date;
        self
    }

    /// Builds and inserts the patient row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::patient::Model)` - Created patient row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::patient::Model, DbErr> {
        entity::patient::ActiveModel {
            name: ActiveValue::Set(self.name),
            last_name: ActiveValue::Set(self.last_name),
            domicilio: ActiveValue::Set(self.domicilio),
            dni: ActiveValue::Set(self.dni),
            email: ActiveValue::Set(self.email),
            admission_date: ActiveValue::Set(self.admission_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a patient with default values.
///
/// Shorthand for `PatientFactory::new(db).build().await`.
pub async fn create_patient(db: &DatabaseConnection) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db).build().await
}

/// Creates a patient with a specific DNI.
pub async fn create_patient_with_dni(
    db: &DatabaseConnection,
    dni: i32,
) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db).dni(dni).build().await
}
