//! Patient domain models and parameters.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::patient::{PatientDto, PatientRequestDto},
    server::{
        model::resource::{Patch, Resource},
        util::parse::{format_date, parse_date},
    },
};

/// Patient registered at the clinic, identified naturally by DNI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    /// Postal address.
    pub domicilio: String,
    /// National identity number, unique across patients.
    pub dni: i32,
    pub email: String,
    pub admission_date: NaiveDate,
}

impl Resource for Patient {
    const NAME: &'static str = "patient";
}

impl Patient {
    /// Converts an entity model to a patient domain model at the store boundary.
    pub fn from_entity(entity: entity::patient::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
            domicilio: entity.domicilio,
            dni: entity.dni,
            email: entity.email,
            admission_date: entity.admission_date,
        }
    }

    /// Converts the patient domain model to a DTO for API responses.
    pub fn into_dto(self) -> PatientDto {
        PatientDto {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            domicilio: self.domicilio,
            dni: self.dni,
            email: self.email,
            admission_date: format_date(self.admission_date),
        }
    }
}

/// Parameters for creating a new patient.
///
/// `admission_date` stays a string until the store parses it.
#[derive(Debug, Clone)]
pub struct CreatePatientParams {
    pub name: String,
    pub last_name: String,
    pub domicilio: String,
    pub dni: i32,
    pub email: String,
    pub admission_date: String,
}

impl CreatePatientParams {
    /// Converts a validated request body into create parameters.
    ///
    /// Fields the controller already checked for presence fall back to their defaults
    /// only if this is called without validation.
    pub fn from_dto(dto: PatientRequestDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            domicilio: dto.domicilio.unwrap_or_default(),
            dni: dto.dni.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            admission_date: dto.admission_date.unwrap_or_default(),
        }
    }
}

/// Parameters for updating an existing patient.
///
/// `None` leaves the stored value in place; `Some` replaces it, zero and empty values
/// included.
#[derive(Debug, Clone, Default)]
pub struct UpdatePatientParams {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub domicilio: Option<String>,
    pub dni: Option<i32>,
    pub email: Option<String>,
    pub admission_date: Option<String>,
}

impl From<PatientRequestDto> for UpdatePatientParams {
    fn from(dto: PatientRequestDto) -> Self {
        Self {
            name: dto.name,
            last_name: dto.last_name,
            domicilio: dto.domicilio,
            dni: dto.dni,
            email: dto.email,
            admission_date: dto.admission_date,
        }
    }
}

impl Patch<Patient> for UpdatePatientParams {
    fn apply(self, mut current: Patient) -> Result<Patient, DbErr> {
        if let Some(name) = self.name {
            current.name = name;
        }
        if let Some(last_name) = self.last_name {
            current.last_name = last_name;
        }
        if let Some(domicilio) = self.domicilio {
            current.domicilio = domicilio;
        }
        if let Some(dni) = self.dni {
            current.dni = dni;
        }
        if let Some(email) = self.email {
            current.email = email;
        }
        if let Some(admission_date) = self.admission_date {
            current.admission_date = parse_date(&admission_date)?;
        }

        Ok(current)
    }
}
