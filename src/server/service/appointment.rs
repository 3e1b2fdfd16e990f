use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::appointment::AppointmentDto,
    server::{
        error::AppError,
        model::appointment::{Appointment, CreateAppointmentParams, UpdateAppointmentParams},
        repository::appointment::AppointmentRepository,
    },
};

#[async_trait]
pub trait AppointmentService: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<AppointmentDto, AppError>;

    /// Lists the appointments of the patient owning `dni`
    async fn get_by_dni(&self, dni: i32) -> Result<Vec<AppointmentDto>, AppError>;

    async fn create(&self, params: CreateAppointmentParams) -> Result<AppointmentDto, AppError>;

    /// Creates an appointment, resolving the patient by DNI and the dentist by license
    ///
    /// The ids in `params` are ignored.
    async fn create_by_dni_and_license(
        &self,
        dni: i32,
        license: String,
        params: CreateAppointmentParams,
    ) -> Result<AppointmentDto, AppError>;

    async fn update(
        &self,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<AppointmentDto, AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

pub struct AppointmentServiceImpl {
    repo: AppointmentRepository,
}

impl AppointmentServiceImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: AppointmentRepository::new(db),
        }
    }
}

#[async_trait]
impl AppointmentService for AppointmentServiceImpl {
    async fn get_by_id(&self, id: i32) -> Result<AppointmentDto, AppError> {
        Ok(self.repo.get_by_id(id).await?.into_dto())
    }

    async fn get_by_dni(&self, dni: i32) -> Result<Vec<AppointmentDto>, AppError> {
        let appointments = self.repo.get_by_dni(dni).await?;

        Ok(appointments
            .into_iter()
            .map(Appointment::into_dto)
            .collect())
    }

    async fn create(&self, params: CreateAppointmentParams) -> Result<AppointmentDto, AppError> {
        Ok(self.repo.create(params).await?.into_dto())
    }

    async fn create_by_dni_and_license(
        &self,
        dni: i32,
        license: String,
        params: CreateAppointmentParams,
    ) -> Result<AppointmentDto, AppError> {
        let appointment = self
            .repo
            .create_by_dni_and_license(dni, &license, params)
            .await?;

        Ok(appointment.into_dto())
    }

    async fn update(
        &self,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<AppointmentDto, AppError> {
        Ok(self.repo.update(id, params).await?.into_dto())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
