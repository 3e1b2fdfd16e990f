use crate::server::{
    data::appointment::AppointmentStore,
    model::appointment::{CreateAppointmentParams, UpdateAppointmentParams},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
