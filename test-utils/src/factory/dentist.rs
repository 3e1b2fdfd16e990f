//! Dentist factory for creating test dentist rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dentists with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dentist::DentistFactory;
///
/// let dentist = DentistFactory::new(&db).license("MP-1234").build().await?;
/// ```
pub struct DentistFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    last_name: String,
    license: String,
}

impl<'a> DentistFactory<'a> {
    /// Creates a new DentistFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dentist {id}"`
    /// - last_name: `"Last {id}"`
    /// - license: `"LIC-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dentist {}", id),
            last_name: format!("Last {}", id),
            license: format!("LIC-{}", id),
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

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Builds and inserts the dentist row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dentist::Model)` - Created dentist row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dentist::Model, DbErr> {
        entity::dentist::ActiveModel {
            name: ActiveValue::Set(self.name),
            last_name: ActiveValue::Set(self.last_name),
            license: ActiveValue::Set(self.license),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dentist with default values.
///
/// Shorthand for `DentistFactory::new(db).build().await`.
pub async fn create_dentist(db: &DatabaseConnection) -> Result<entity::dentist::Model, DbErr> {
    DentistFactory::new(db).build().await
}

/// Creates a dentist with a specific license.
pub async fn create_dentist_with_license(
    db: &DatabaseConnection,
    license: &str,
) -> Result<entity::dentist::Model, DbErr> {
    DentistFactory::new(db).license(license).build().await
}
