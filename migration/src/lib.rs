pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_patient_table;
mod m20240601_000002_create_dentist_table;
mod m20240601_000003_create_appointment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_patient_table::Migration),
            Box::new(m20240601_000002_create_dentist_table::Migration),
            Box::new(m20240601_000003_create_appointment_table::Migration),
        ]
    }
}
