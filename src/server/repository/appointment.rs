use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{appointment::AppointmentStore, dentist::DentistStore, patient::PatientStore},
    error::AppError,
    model::{
        appointment::{Appointment, CreateAppointmentParams, UpdateAppointmentParams},
        dentist::Dentist,
        patient::Patient,
    },
    repository::{not_found, Action, StorageContext},
};

/// Repository for appointments and their patient and dentist references.
///
/// Appointments reference patients and dentists by id. Every appointment returned from
/// here carries both full records.
pub struct AppointmentRepository {
    db: DatabaseConnection,
}

impl AppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an appointment by ID
    ///
    /// # Returns
    /// - `Ok(Appointment)`: The appointment with nested patient and dentist
    /// - `Err(AppError::NotFound)`: `"appointment <id> not found"`
    /// - `Err(AppError::DbErr)`: Database error during lookup
    pub async fn get_by_id(&self, id: i32) -> Result<Appointment, AppError> {
        AppointmentStore::new(&self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found::<Appointment>(id))
    }

    /// Gets all appointments of the patient owning `dni`
    ///
    /// # Returns
    /// - `Ok(Vec<Appointment>)`: Appointments ordered by id, empty when none match
    /// - `Err(AppError::NotFound)`: `"appointments with patient.dni: <dni> not found"`
    ///   when the lookup itself fails
    pub async fn get_by_dni(&self, dni: i32) -> Result<Vec<Appointment>, AppError> {
        AppointmentStore::new(&self.db)
            .get_by_dni(dni)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "error listing appointments of dni {}", dni);
                AppError::NotFound(format!("appointments with patient.dni: {} not found", dni))
            })
    }

    /// Creates an appointment between an existing patient and dentist
    ///
    /// # Returns
    /// - `Ok(Appointment)`: The created appointment with nested records
    /// - `Err(AppError::NotFound)`: `"patient <id> not found"` / `"dentist <id> not found"`
    /// - `Err(AppError::BadRequest)`: Storage failure, including unparseable date or hour
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .context::<Appointment>(Action::Create)?;

        let patient_exists = PatientStore::new(&txn)
            .get_by_id(params.patient_id)
            .await
            .context::<Appointment>(Action::Create)?
            .is_some();
        if !patient_exists {
            return Err(not_found::<Patient>(params.patient_id));
        }

        let dentist_exists = DentistStore::new(&txn)
            .get_by_id(params.dentist_id)
            .await
            .context::<Appointment>(Action::Create)?
            .is_some();
        if !dentist_exists {
            return Err(not_found::<Dentist>(params.dentist_id));
        }

        let appointment = insert(&txn, params).await?;

        txn.commit()
            .await
            .context::<Appointment>(Action::Create)?;

        Ok(appointment)
    }

    /// Creates an appointment for the patient owning `dni` with the dentist owning `license`
    ///
    /// Nothing is inserted unless both lookups succeed.
    ///
    /// # Returns
    /// - `Ok(Appointment)`: The created appointment with nested records
    /// - `Err(AppError::NotFound)`: `"patient with dni <dni> not found"` /
    ///   `"dentist with license <license> not found"`
    /// - `Err(AppError::BadRequest)`: Storage failure
    pub async fn create_by_dni_and_license(
        &self,
        dni: i32,
        license: &str,
        params: CreateAppointmentParams,
    ) -> Result<Appointment, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .context::<Appointment>(Action::Create)?;

        let patient = PatientStore::new(&txn)
            .get_by_dni(dni)
            .await
            .context::<Appointment>(Action::Create)?
            .ok_or_else(|| AppError::NotFound(format!("patient with dni {} not found", dni)))?;

        let dentist = DentistStore::new(&txn)
            .get_by_license(license)
            .await
            .context::<Appointment>(Action::Create)?
            .ok_or_else(|| {
                AppError::NotFound(format!("dentist with license {} not found", license))
            })?;

        let appointment = insert(
            &txn,
            CreateAppointmentParams {
                patient_id: patient.id,
                dentist_id: dentist.id,
                ..params
            },
        )
        .await?;

        txn.commit()
            .await
            .context::<Appointment>(Action::Create)?;

        Ok(appointment)
    }

    /// Merges the present fields onto the stored appointment
    ///
    /// Relinked references must exist; the returned appointment carries their full
    /// records.
    ///
    /// # Returns
    /// - `Ok(Appointment)`: The appointment after the update
    /// - `Err(AppError::NotFound)`: The appointment or a newly referenced patient or
    ///   dentist does not exist
    /// - `Err(AppError::BadRequest)`: Storage failure
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<Appointment, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .context::<Appointment>(Action::Update)?;
        let store = AppointmentStore::new(&txn);

        let exists = store
            .get_by_id(id)
            .await
            .context::<Appointment>(Action::Update)?
            .is_some();
        if !exists {
            return Err(not_found::<Appointment>(id));
        }

        let patient = match params.patient_id {
            Some(patient_id) => Some(
                PatientStore::new(&txn)
                    .get_by_id(patient_id)
                    .await
                    .context::<Appointment>(Action::Update)?
                    .ok_or_else(|| not_found::<Patient>(patient_id))?,
            ),
            None => None,
        };

        let dentist = match params.dentist_id {
            Some(dentist_id) => Some(
                DentistStore::new(&txn)
                    .get_by_id(dentist_id)
                    .await
                    .context::<Appointment>(Action::Update)?
                    .ok_or_else(|| not_found::<Dentist>(dentist_id))?,
            ),
            None => None,
        };

        let mut change = match store.update(id, params).await {
            Err(DbErr::RecordNotFound(_)) => return Err(not_found::<Appointment>(id)),
            result => result.context::<Appointment>(Action::Update)?,
        };

        if change.patient_changed {
            if let Some(patient) = patient {
                change.appointment.patient = patient;
            }
        }
        if change.dentist_changed {
            if let Some(dentist) = dentist {
                change.appointment.dentist = dentist;
            }
        }

        txn.commit()
            .await
            .context::<Appointment>(Action::Update)?;

        Ok(change.appointment)
    }

    /// Deletes an appointment
    ///
    /// # Returns
    /// - `Ok(())`: The appointment was deleted
    /// - `Err(AppError::NotFound)`: `"appointment <id> not found"`
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = AppointmentStore::new(&self.db)
            .delete(id)
            .await
            .context::<Appointment>(Action::Delete)?;

        if rows == 0 {
            return Err(not_found::<Appointment>(id));
        }

        Ok(())
    }
}

/// Inserts the appointment row and reads it back with both references attached.
async fn insert<C: ConnectionTrait>(
    db: &C,
    params: CreateAppointmentParams,
) -> Result<Appointment, AppError> {
    let store = AppointmentStore::new(db);

    let id = store
        .create(params)
        .await
        .context::<Appointment>(Action::Create)?;

    store
        .get_by_id(id)
        .await
        .context::<Appointment>(Action::Create)?
        .ok_or_else(|| not_found::<Appointment>(id))
}
