use crate::server::{
    data::patient::PatientStore,
    model::patient::{CreatePatientParams, UpdatePatientParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_dni;

fn create_params(dni: i32) -> CreatePatientParams {
    CreatePatientParams {
        name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        domicilio: "Calle 1".to_string(),
        dni,
        email: "ana@example.com".to_string(),
        admission_date: "2024-01-15".to_string(),
    }
}
