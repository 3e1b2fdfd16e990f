//! Appointment store.
//!
//! Appointments are the only joined resource: every read attaches the full patient and
//! dentist rows referenced by the appointment's foreign keys.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    model::{
        appointment::{
            Appointment, AppointmentChange, CreateAppointmentParams, UpdateAppointmentParams,
        },
        dentist::Dentist,
        patient::Patient,
        resource::Patch,
    },
    util::parse::{parse_date, parse_hour},
};

pub struct AppointmentStore<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets an appointment by ID with its patient and dentist attached
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))`: The appointment with nested records
    /// - `Ok(None)`: No appointment with this id
    /// - `Err(DbErr::RecordNotFound)`: A referenced patient or dentist row is missing
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        let Some((appointment, patient)) = entity::prelude::Appointment::find_by_id(id)
            .find_also_related(entity::prelude::Patient)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let dentist = entity::prelude::Dentist::find_by_id(appointment.dentist_id)
            .one(self.db)
            .await?;

        assemble(appointment, patient, dentist).map(Some)
    }

    /// Gets every appointment of the patient owning `dni`, ordered by id
    ///
    /// Dentists of all matching appointments are fetched in a single query.
    pub async fn get_by_dni(&self, dni: i32) -> Result<Vec<Appointment>, DbErr> {
        let rows = entity::prelude::Appointment::find()
            .find_also_related(entity::prelude::Patient)
            .filter(entity::patient::Column::Dni.eq(dni))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        let dentist_ids: Vec<i32> = rows.iter().map(|(a, _)| a.dentist_id).collect();
        let dentists_map: HashMap<i32, entity::dentist::Model> = if !dentist_ids.is_empty() {
            entity::prelude::Dentist::find()
                .filter(entity::dentist::Column::Id.is_in(dentist_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|d| (d.id, d))
                .collect()
        } else {
            HashMap::new()
        };

        rows.into_iter()
            .map(|(appointment, patient)| {
                let dentist = dentists_map.get(&appointment.dentist_id).cloned();
                assemble(appointment, patient, dentist)
            })
            .collect()
    }

    /// Inserts a new appointment row, returning its id
    ///
    /// `date` accepts `yyyy-mm-dd` or `dd-mm-yyyy`; `hour` is stored as `hh:mm:ss`.
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<i32, DbErr> {
        let date = parse_date(&params.date)?;
        let hour = parse_hour(&params.hour)?;

        let appointment = entity::appointment::ActiveModel {
            date: ActiveValue::Set(date),
            hour: ActiveValue::Set(hour),
            description: ActiveValue::Set(params.description),
            patient_id: ActiveValue::Set(params.patient_id),
            dentist_id: ActiveValue::Set(params.dentist_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(appointment.id)
    }

    /// Merges the present fields of `params` onto the stored appointment and writes it
    ///
    /// # Returns
    /// - `Ok(AppointmentChange)`: Stored appointment; flags mark relinked references whose
    ///   nested record only carries the new id
    /// - `Err(DbErr::RecordNotFound)`: No appointment with this id
    /// - `Err(DbErr)`: Parse or write failure
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<AppointmentChange, DbErr> {
        let change = self.complete_empty_attributes(id, params).await?;
        let merged = &change.appointment;

        entity::appointment::ActiveModel {
            id: ActiveValue::Unchanged(merged.id),
            date: ActiveValue::Set(merged.date),
            hour: ActiveValue::Set(merged.hour),
            description: ActiveValue::Set(merged.description.clone()),
            patient_id: ActiveValue::Set(merged.patient.id),
            dentist_id: ActiveValue::Set(merged.dentist.id),
        }
        .update(self.db)
        .await?;

        Ok(change)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn complete_empty_attributes(
        &self,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<AppointmentChange, DbErr> {
        let current = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("appointment {} not found", id)))?;

        let patient_id = current.patient.id;
        let dentist_id = current.dentist.id;
        let appointment = params.apply(current)?;

        Ok(AppointmentChange {
            patient_changed: appointment.patient.id != patient_id,
            dentist_changed: appointment.dentist.id != dentist_id,
            appointment,
        })
    }

    /// Counts appointments referencing a patient
    pub async fn count_by_patient(&self, patient_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PatientId.eq(patient_id))
            .count(self.db)
            .await
    }

    /// Counts appointments referencing a dentist
    pub async fn count_by_dentist(&self, dentist_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::DentistId.eq(dentist_id))
            .count(self.db)
            .await
    }
}

fn assemble(
    appointment: entity::appointment::Model,
    patient: Option<entity::patient::Model>,
    dentist: Option<entity::dentist::Model>,
) -> Result<Appointment, DbErr> {
    match (patient, dentist) {
        (Some(patient), Some(dentist)) => Ok(Appointment::from_entity(
            appointment,
            Patient::from_entity(patient),
            Dentist::from_entity(dentist),
        )),
        _ => Err(DbErr::RecordNotFound(format!(
            "references of appointment {} not found",
            appointment.id
        ))),
    }
}
