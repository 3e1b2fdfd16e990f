use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{appointment::AppointmentStore, patient::PatientStore},
    error::AppError,
    model::patient::{CreatePatientParams, Patient, UpdatePatientParams},
    repository::{not_found, Action, StorageContext},
};

pub struct PatientRepository {
    db: DatabaseConnection,
}

impl PatientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a patient by ID
    ///
    /// # Returns
    /// - `Ok(Patient)`: The stored patient
    /// - `Err(AppError::NotFound)`: `"patient <id> not found"`
    /// - `Err(AppError::DbErr)`: Database error during lookup
    pub async fn get_by_id(&self, id: i32) -> Result<Patient, AppError> {
        PatientStore::new(&self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found::<Patient>(id))
    }

    /// Creates a patient after checking that its DNI is unused
    ///
    /// # Returns
    /// - `Ok(Patient)`: The created patient
    /// - `Err(AppError::BadRequest)`: `"dni already exists"` or a storage failure
    pub async fn create(&self, params: CreatePatientParams) -> Result<Patient, AppError> {
        let txn = self.db.begin().await.context::<Patient>(Action::Create)?;
        let store = PatientStore::new(&txn);

        let owner = store
            .get_by_dni(params.dni)
            .await
            .context::<Patient>(Action::Create)?;
        if owner.is_some() {
            return Err(dni_conflict());
        }

        let patient = store
            .create(params)
            .await
            .context::<Patient>(Action::Create)?;

        txn.commit().await.context::<Patient>(Action::Create)?;

        Ok(patient)
    }

    /// Merges the present fields onto the stored patient
    ///
    /// A new DNI is only rejected when another patient owns it.
    ///
    /// # Returns
    /// - `Ok(Patient)`: The patient after the update
    /// - `Err(AppError::NotFound)`: `"patient <id> not found"`
    /// - `Err(AppError::BadRequest)`: `"dni already exists"` or a storage failure
    pub async fn update(&self, id: i32, params: UpdatePatientParams) -> Result<Patient, AppError> {
        let txn = self.db.begin().await.context::<Patient>(Action::Update)?;
        let store = PatientStore::new(&txn);

        if let Some(dni) = params.dni {
            let owner = store
                .get_by_dni(dni)
                .await
                .context::<Patient>(Action::Update)?;
            if owner.is_some_and(|owner| owner.id != id) {
                return Err(dni_conflict());
            }
        }

        let patient = match store.update(id, params).await {
            Err(DbErr::RecordNotFound(_)) => return Err(not_found::<Patient>(id)),
            result => result.context::<Patient>(Action::Update)?,
        };

        txn.commit().await.context::<Patient>(Action::Update)?;

        Ok(patient)
    }

    /// Deletes a patient that no appointment references
    ///
    /// # Returns
    /// - `Ok(())`: The patient was deleted
    /// - `Err(AppError::NotFound)`: `"patient <id> not found"`
    /// - `Err(AppError::BadRequest)`: `"patient <id> has appointments"` or a storage failure
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.context::<Patient>(Action::Delete)?;

        let appointments = AppointmentStore::new(&txn)
            .count_by_patient(id)
            .await
            .context::<Patient>(Action::Delete)?;
        if appointments > 0 {
            return Err(AppError::BadRequest(format!(
                "patient {} has appointments",
                id
            )));
        }

        let rows = PatientStore::new(&txn)
            .delete(id)
            .await
            .context::<Patient>(Action::Delete)?;
        if rows == 0 {
            return Err(not_found::<Patient>(id));
        }

        txn.commit().await.context::<Patient>(Action::Delete)?;

        Ok(())
    }
}

fn dni_conflict() -> AppError {
    AppError::BadRequest("dni already exists".to_string())
}
