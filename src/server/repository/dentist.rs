use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{appointment::AppointmentStore, dentist::DentistStore},
    error::AppError,
    model::dentist::{CreateDentistParams, Dentist, UpdateDentistParams},
    repository::{not_found, Action, StorageContext},
};

pub struct DentistRepository {
    db: DatabaseConnection,
}

impl DentistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Dentist, AppError> {
        DentistStore::new(&self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found::<Dentist>(id))
    }

    /// Creates a dentist after checking that its license is unused
    pub async fn create(&self, params: CreateDentistParams) -> Result<Dentist, AppError> {
        let txn = self.db.begin().await.context::<Dentist>(Action::Create)?;
        let store = DentistStore::new(&txn);

        let owner = store
            .get_by_license(&params.license)
            .await
            .context::<Dentist>(Action::Create)?;
        if owner.is_some() {
            return Err(license_conflict());
        }

        let dentist = store
            .create(params)
            .await
            .context::<Dentist>(Action::Create)?;

        txn.commit().await.context::<Dentist>(Action::Create)?;

        Ok(dentist)
    }

    /// Merges the present fields onto the stored dentist
    ///
    /// A new license is only rejected when another dentist owns it.
    pub async fn update(&self, id: i32, params: UpdateDentistParams) -> Result<Dentist, AppError> {
        let txn = self.db.begin().await.context::<Dentist>(Action::Update)?;
        let store = DentistStore::new(&txn);

        if let Some(license) = params.license.as_deref() {
            let owner = store
                .get_by_license(license)
                .await
                .context::<Dentist>(Action::Update)?;
            if owner.is_some_and(|owner| owner.id != id) {
                return Err(license_conflict());
            }
        }

        let dentist = match store.update(id, params).await {
            Err(DbErr::RecordNotFound(_)) => return Err(not_found::<Dentist>(id)),
            result => result.context::<Dentist>(Action::Update)?,
        };

        txn.commit().await.context::<Dentist>(Action::Update)?;

        Ok(dentist)
    }

    /// Deletes a dentist that no appointment references
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.context::<Dentist>(Action::Delete)?;

        let appointments = AppointmentStore::new(&txn)
            .count_by_dentist(id)
            .await
            .context::<Dentist>(Action::Delete)?;
        if appointments > 0 {
            return Err(AppError::BadRequest(format!(
                "dentist {} has appointments",
                id
            )));
        }

        let rows = DentistStore::new(&txn)
            .delete(id)
            .await
            .context::<Dentist>(Action::Delete)?;
        if rows == 0 {
            return Err(not_found::<Dentist>(id));
        }

        txn.commit().await.context::<Dentist>(Action::Delete)?;

        Ok(())
    }
}

fn license_conflict() -> AppError {
    AppError::BadRequest("license already exists".to_string())
}
