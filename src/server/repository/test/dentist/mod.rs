use super::{bad_request, clinic, not_found};
use crate::server::{
    error::AppError,
    model::dentist::{CreateDentistParams, UpdateDentistParams},
    repository::dentist::DentistRepository,
};
use sea_orm::EntityTrait;
use test_utils::factory;

mod update;
