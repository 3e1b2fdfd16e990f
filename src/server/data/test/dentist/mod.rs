use crate::server::{
    data::dentist::DentistStore,
    model::dentist::{CreateDentistParams, UpdateDentistParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_license;
mod update;
