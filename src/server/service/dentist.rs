use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::dentist::DentistDto,
    server::{
        error::AppError,
        model::dentist::{CreateDentistParams, UpdateDentistParams},
        repository::dentist::DentistRepository,
    },
};

#[async_trait]
pub trait DentistService: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<DentistDto, AppError>;

    async fn create(&self, params: CreateDentistParams) -> Result<DentistDto, AppError>;

    async fn update(&self, id: i32, params: UpdateDentistParams) -> Result<DentistDto, AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

pub struct DentistServiceImpl {
    repo: DentistRepository,
}

impl DentistServiceImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: DentistRepository::new(db),
        }
    }
}

#[async_trait]
impl DentistService for DentistServiceImpl {
    async fn get_by_id(&self, id: i32) -> Result<DentistDto, AppError> {
        Ok(self.repo.get_by_id(id).await?.into_dto())
    }

    async fn create(&self, params: CreateDentistParams) -> Result<DentistDto, AppError> {
        Ok(self.repo.create(params).await?.into_dto())
    }

    async fn update(&self, id: i32, params: UpdateDentistParams) -> Result<DentistDto, AppError> {
        Ok(self.repo.update(id, params).await?.into_dto())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
