use serde::{Deserialize, Serialize};

use crate::model::{
    dentist::{DentistDto, DentistRequestDto},
    patient::{PatientDto, PatientRequestDto},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDto {
    pub id: i32,
    pub date: String, // Format: "YYYY-MM-DD"
    pub hour: String, // Format: "HH:MM:SS"
    pub description: String,
    pub patient: PatientDto,
    pub dentist: DentistDto,
}

/// Appointment request body.
///
/// Only the `id` of the nested patient and dentist is used to link the
/// appointment; the remaining nested fields are accepted for compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequestDto {
    pub date: Option<String>,
    pub hour: Option<String>,
    pub description: Option<String>,
    pub patient: Option<PatientRequestDto>,
    pub dentist: Option<DentistRequestDto>,
}

/// Query string of `POST /appointments/dni/license`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DniLicenseQuery {
    pub dni: Option<String>,
    pub license: Option<String>,
}
