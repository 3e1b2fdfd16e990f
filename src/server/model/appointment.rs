//! Appointment domain models and parameters.
//!
//! An appointment is stored with `patient_id` and `dentist_id` foreign keys but always
//! materialized with the full patient and dentist records attached.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;

use crate::{
    model::appointment::{AppointmentDto, AppointmentRequestDto},
    server::{
        model::{
            dentist::Dentist,
            patient::Patient,
            resource::{Patch, Resource},
        },
        util::parse::{format_date, format_hour, parse_date, parse_hour},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub date: NaiveDate,
    pub hour: NaiveTime,
    pub description: String,
    pub patient: Patient,
    pub dentist: Dentist,
}

impl Resource for Appointment {
    const NAME: &'static str = "appointment";
}

impl Appointment {
    /// Converts an appointment row and its resolved references into a domain model.
    pub fn from_entity(
        entity: entity::appointment::Model,
        patient: Patient,
        dentist: Dentist,
    ) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            hour: entity.hour,
            description: entity.description,
            patient,
            dentist,
        }
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            date: format_date(self.date),
            hour: format_hour(self.hour),
            description: self.description,
            patient: self.patient.into_dto(),
            dentist: self.dentist.into_dto(),
        }
    }
}

/// Parameters for inserting an appointment row.
///
/// `date` and `hour` stay strings until the store parses them. The ids are either taken
/// from the nested request objects or resolved from natural keys by the repository.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub date: String,
    pub hour: String,
    pub description: String,
    pub patient_id: i32,
    pub dentist_id: i32,
}

impl CreateAppointmentParams {
    pub fn from_dto(dto: AppointmentRequestDto) -> Self {
        Self {
            date: dto.date.unwrap_or_default(),
            hour: dto.hour.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            patient_id: dto.patient.and_then(|p| p.id).unwrap_or_default(),
            dentist_id: dto.dentist.and_then(|d| d.id).unwrap_or_default(),
        }
    }
}

/// Parameters for updating an existing appointment.
///
/// A present `patient_id` or `dentist_id` relinks the appointment; the nested record is
/// replaced by an id-only placeholder until the repository loads the full row.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentParams {
    pub date: Option<String>,
    pub hour: Option<String>,
    pub description: Option<String>,
    pub patient_id: Option<i32>,
    pub dentist_id: Option<i32>,
}

impl From<AppointmentRequestDto> for UpdateAppointmentParams {
    fn from(dto: AppointmentRequestDto) -> Self {
        Self {
            date: dto.date,
            hour: dto.hour,
            description: dto.description,
            patient_id: dto.patient.and_then(|p| p.id),
            dentist_id: dto.dentist.and_then(|d| d.id),
        }
    }
}

impl Patch<Appointment> for UpdateAppointmentParams {
    fn apply(self, mut current: Appointment) -> Result<Appointment, DbErr> {
        if let Some(date) = self.date {
            current.date = parse_date(&date)?;
        }
        if let Some(hour) = self.hour {
            current.hour = parse_hour(&hour)?;
        }
        if let Some(description) = self.description {
            current.description = description;
        }
        if let Some(patient_id) = self.patient_id {
            if patient_id != current.patient.id {
                current.patient = Patient {
                    id: patient_id,
                    ..Default::default()
                };
            }
        }
        if let Some(dentist_id) = self.dentist_id {
            if dentist_id != current.dentist.id {
                current.dentist = Dentist {
                    id: dentist_id,
                    ..Default::default()
                };
            }
        }

        Ok(current)
    }
}

/// Result of merging an update onto a stored appointment.
///
/// When a flag is set the matching nested record only carries its id and must be
/// re-fetched before the appointment leaves the repository.
#[derive(Debug, Clone)]
pub struct AppointmentChange {
    pub patient_changed: bool,
    pub dentist_changed: bool,
    pub appointment: Appointment,
}
