//! Request body validation shared by the handlers.
//!
//! Required-field checks report the first missing field in a fixed priority order.
//! Date and hour checks parse the components and apply a range check whose strictness is
//! configured at startup.

use crate::{
    model::{
        appointment::AppointmentRequestDto, dentist::DentistRequestDto,
        patient::PatientRequestDto,
    },
    server::error::AppError,
};

/// How date and hour components are range checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeCheck {
    /// Reject only when every component is out of range.
    #[default]
    Permissive,
    /// Reject when any component is out of range.
    Strict,
}

impl RangeCheck {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Permissive
        }
    }
}

/// Request bodies whose required fields are checked on create and full update.
pub trait RequiredFields {
    /// Label of the first required field that is absent or empty.
    fn first_missing(&self) -> Option<&'static str>;

    /// Fails with `"<label> can't be empty"` for the first missing field.
    fn require_all(&self) -> Result<(), AppError> {
        match self.first_missing() {
            Some(label) => Err(AppError::BadRequest(format!("{} can't be empty", label))),
            None => Ok(()),
        }
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn zero(value: Option<i32>) -> bool {
    value.unwrap_or_default() == 0
}

impl RequiredFields for PatientRequestDto {
    fn first_missing(&self) -> Option<&'static str> {
        if blank(&self.name) {
            Some("name")
        } else if blank(&self.last_name) {
            Some("last_name")
        } else if zero(self.dni) {
            Some("dni")
        } else if blank(&self.email) {
            Some("email")
        } else if blank(&self.admission_date) {
            Some("admission_date")
        } else {
            None
        }
    }
}

impl RequiredFields for DentistRequestDto {
    fn first_missing(&self) -> Option<&'static str> {
        if blank(&self.name) {
            Some("name")
        } else if blank(&self.last_name) {
            Some("last_name")
        } else if blank(&self.license) {
            Some("license")
        } else {
            None
        }
    }
}

fn patient_is_blank(patient: &PatientRequestDto) -> bool {
    zero(patient.id)
        && blank(&patient.name)
        && blank(&patient.last_name)
        && blank(&patient.domicilio)
        && zero(patient.dni)
        && blank(&patient.email)
        && blank(&patient.admission_date)
}

fn dentist_is_blank(dentist: &DentistRequestDto) -> bool {
    zero(dentist.id) && blank(&dentist.name) && blank(&dentist.last_name) && blank(&dentist.license)
}

impl RequiredFields for AppointmentRequestDto {
    fn first_missing(&self) -> Option<&'static str> {
        if blank(&self.description) {
            return Some("Description");
        }
        match &self.patient {
            Some(patient) if !patient_is_blank(patient) => {
                if zero(patient.id) {
                    return Some("Patient.id");
                }
            }
            _ => return Some("Patient"),
        }
        match &self.dentist {
            Some(dentist) if !dentist_is_blank(dentist) => {
                if zero(dentist.id) {
                    return Some("Dentist.id");
                }
            }
            _ => return Some("Dentist"),
        }
        None
    }
}

/// Parses `value` split on `separator` into exactly three integers.
fn components(value: &str, separator: char) -> Option<Result<[i32; 3], ()>> {
    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != 3 {
        return None;
    }

    let mut numbers = [0; 3];
    for (slot, part) in numbers.iter_mut().zip(parts) {
        match part.parse::<i32>() {
            Ok(number) => *slot = number,
            Err(_) => return Some(Err(())),
        }
    }

    Some(Ok(numbers))
}

/// Validates a date field.
///
/// The value must be three `-` separated integers. In permissive mode the parts are
/// read as `[year, month, day]` and rejected only when all three are out of range. In
/// strict mode every part must be in range, reading them either as `yyyy-mm-dd` or as
/// `dd-mm-yyyy`.
///
/// # Arguments
/// - `field` - Field name used in messages (`"date"`, `"admission_date"`)
/// - `value` - The submitted date
/// - `check` - Range check mode
pub fn validate_date(field: &str, value: &str, check: RangeCheck) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} can't be empty", field)));
    }

    let [a, b, c] = match components(value, '-') {
        None => {
            return Err(AppError::BadRequest(format!(
                "invalid {}, must be in format: dd-mm-yyyy",
                field
            )))
        }
        Some(Err(())) => {
            return Err(AppError::BadRequest(format!(
                "invalid {}, must be numbers",
                field
            )))
        }
        Some(Ok(parts)) => parts,
    };

    let year = |v: i32| (1..=9999).contains(&v);
    let month = |v: i32| (1..=12).contains(&v);
    let day = |v: i32| (1..=31).contains(&v);

    let in_range = match check {
        RangeCheck::Permissive => year(a) || month(b) || day(c),
        RangeCheck::Strict => (year(a) && month(b) && day(c)) || (day(a) && month(b) && year(c)),
    };

    if !in_range {
        return Err(AppError::BadRequest(format!(
            "invalid {}, date must be between 1 and 31-12-9999",
            field
        )));
    }

    Ok(())
}

/// Validates an `hh:mm:ss` hour with the same permissive or strict range rule as dates.
pub fn validate_hour(value: &str, check: RangeCheck) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest("hour can't be empty".to_string()));
    }

    let [h, m, s] = match components(value, ':') {
        None => {
            return Err(AppError::BadRequest(
                "invalid hour, must be in format: hh:mm:ss".to_string(),
            ))
        }
        Some(Err(())) => {
            return Err(AppError::BadRequest(
                "invalid hour, must be numbers".to_string(),
            ))
        }
        Some(Ok(parts)) => parts,
    };

    let hour = (0..=23).contains(&h);
    let minute = (0..=59).contains(&m);
    let second = (0..=59).contains(&s);

    let in_range = match check {
        RangeCheck::Permissive => hour || minute || second,
        RangeCheck::Strict => hour && minute && second,
    };

    if !in_range {
        return Err(AppError::BadRequest(
            "invalid hour, date must be between 00:00:00 and 23:59:59".to_string(),
        ));
    }

    Ok(())
}
