use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDto {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub domicilio: String,
    pub dni: i32,
    pub email: String,
    pub admission_date: String, // Format: "YYYY-MM-DD"
}

/// Patient request body used by POST, PUT and PATCH.
///
/// `id` is accepted so nested patients inside an appointment body can reference
/// an existing row; it is ignored on the patient routes themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRequestDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub domicilio: Option<String>,
    pub dni: Option<i32>,
    pub email: Option<String>,
    pub admission_date: Option<String>,
}
