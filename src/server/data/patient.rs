use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    model::{
        patient::{CreatePatientParams, Patient, UpdatePatientParams},
        resource::Patch,
    },
    util::parse::parse_date,
};

pub struct PatientStore<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PatientStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Patient>, DbErr> {
        let patient = entity::prelude::Patient::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(patient.map(Patient::from_entity))
    }

    /// Finds the patient owning a DNI
    pub async fn get_by_dni(&self, dni: i32) -> Result<Option<Patient>, DbErr> {
        let patient = entity::prelude::Patient::find()
            .filter(entity::patient::Column::Dni.eq(dni))
            .one(self.db)
            .await?;

        Ok(patient.map(Patient::from_entity))
    }

    /// Inserts a new patient
    ///
    /// # Returns
    /// - `Ok(Patient)`: The inserted patient with its assigned id
    /// - `Err(DbErr::Custom)`: `admission_date` is neither `yyyy-mm-dd` nor `dd-mm-yyyy`
    /// - `Err(DbErr)`: Insert failed, including a DNI unique violation
    pub async fn create(&self, params: CreatePatientParams) -> Result<Patient, DbErr> {
        let admission_date = parse_date(&params.admission_date)?;

        let patient = entity::patient::ActiveModel {
            name: ActiveValue::Set(params.name),
            last_name: ActiveValue::Set(params.last_name),
            domicilio: ActiveValue::Set(params.domicilio),
            dni: ActiveValue::Set(params.dni),
            email: ActiveValue::Set(params.email),
            admission_date: ActiveValue::Set(admission_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Patient::from_entity(patient))
    }

    /// Merges the present fields of `params` onto the stored patient and writes the result
    ///
    /// # Returns
    /// - `Ok(Patient)`: The patient as stored after the update
    /// - `Err(DbErr::RecordNotFound)`: No patient with this id
    /// - `Err(DbErr)`: Parse or write failure
    pub async fn update(&self, id: i32, params: UpdatePatientParams) -> Result<Patient, DbErr> {
        let merged = self.complete_empty_attributes(id, params).await?;

        let patient = entity::patient::ActiveModel {
            id: ActiveValue::Unchanged(merged.id),
            name: ActiveValue::Set(merged.name),
            last_name: ActiveValue::Set(merged.last_name),
            domicilio: ActiveValue::Set(merged.domicilio),
            dni: ActiveValue::Set(merged.dni),
            email: ActiveValue::Set(merged.email),
            admission_date: ActiveValue::Set(merged.admission_date),
        }
        .update(self.db)
        .await?;

        Ok(Patient::from_entity(patient))
    }

    /// Deletes a patient, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Patient::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Loads the stored patient and overlays every field present in `params`
    pub async fn complete_empty_attributes(
        &self,
        id: i32,
        params: UpdatePatientParams,
    ) -> Result<Patient, DbErr> {
        let current = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("patient {} not found", id)))?;

        params.apply(current)
    }
}
