use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_patient_table::Patient, m20240601_000002_create_dentist_table::Dentist,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(date(Appointment::Date))
                    .col(time(Appointment::Hour))
                    .col(text(Appointment::Description))
                    .col(integer(Appointment::PatientId))
                    .col(integer(Appointment::DentistId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_patient_id")
                            .from(Appointment::Table, Appointment::PatientId)
                            .to(Patient::Table, Patient::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_dentist_id")
                            .from(Appointment::Table, Appointment::DentistId)
                            .to(Dentist::Table, Dentist::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    Date,
    Hour,
    Description,
    PatientId,
    DentistId,
}
