use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::patient::PatientDto,
    server::{
        error::AppError,
        model::patient::{CreatePatientParams, UpdatePatientParams},
        repository::patient::PatientRepository,
    },
};

#[async_trait]
pub trait PatientService: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<PatientDto, AppError>;

    async fn create(&self, params: CreatePatientParams) -> Result<PatientDto, AppError>;

    /// Applies the present fields of `params`; used by both full and partial updates
    async fn update(&self, id: i32, params: UpdatePatientParams) -> Result<PatientDto, AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

pub struct PatientServiceImpl {
    repo: PatientRepository,
}

impl PatientServiceImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: PatientRepository::new(db),
        }
    }
}

#[async_trait]
impl PatientService for PatientServiceImpl {
    async fn get_by_id(&self, id: i32) -> Result<PatientDto, AppError> {
        let patient = self.repo.get_by_id(id).await?;

        Ok(patient.into_dto())
    }

    async fn create(&self, params: CreatePatientParams) -> Result<PatientDto, AppError> {
        let patient = self.repo.create(params).await?;

        Ok(patient.into_dto())
    }

    async fn update(&self, id: i32, params: UpdatePatientParams) -> Result<PatientDto, AppError> {
        let patient = self.repo.update(id, params).await?;

        Ok(patient.into_dto())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
