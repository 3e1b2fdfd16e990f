//! Dentist domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::dentist::{DentistDto, DentistRequestDto},
    server::model::resource::{Patch, Resource},
};

/// Dentist working at the clinic, identified naturally by license.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dentist {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    /// Professional registration number, unique across dentists.
    pub license: String,
}

impl Resource for Dentist {
    const NAME: &'static str = "dentist";
}

impl Dentist {
    pub fn from_entity(entity: entity::dentist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
            license: entity.license,
        }
    }

    pub fn into_dto(self) -> DentistDto {
        DentistDto {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            license: self.license,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDentistParams {
    pub name: String,
    pub last_name: String,
    pub license: String,
}

impl CreateDentistParams {
    pub fn from_dto(dto: DentistRequestDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            license: dto.license.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDentistParams {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub license: Option<String>,
}

impl From<DentistRequestDto> for UpdateDentistParams {
    fn from(dto: DentistRequestDto) -> Self {
        Self {
            name: dto.name,
            last_name: dto.last_name,
            license: dto.license,
        }
    }
}

impl Patch<Dentist> for UpdateDentistParams {
    fn apply(self, mut current: Dentist) -> Result<Dentist, DbErr> {
        if let Some(name) = self.name {
            current.name = name;
        }
        if let Some(last_name) = self.last_name {
            current.last_name = last_name;
        }
        if let Some(license) = self.license {
            current.license = license;
        }

        Ok(current)
    }
}
