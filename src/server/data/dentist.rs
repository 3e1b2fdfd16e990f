use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::{
    dentist::{CreateDentistParams, Dentist, UpdateDentistParams},
    resource::Patch,
};

pub struct DentistStore<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DentistStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Dentist>, DbErr> {
        let dentist = entity::prelude::Dentist::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(dentist.map(Dentist::from_entity))
    }

    pub async fn get_by_license(&self, license: &str) -> Result<Option<Dentist>, DbErr> {
        let dentist = entity::prelude::Dentist::find()
            .filter(entity::dentist::Column::License.eq(license))
            .one(self.db)
            .await?;

        Ok(dentist.map(Dentist::from_entity))
    }

    pub async fn create(&self, params: CreateDentistParams) -> Result<Dentist, DbErr> {
        let dentist = entity::dentist::ActiveModel {
            name: ActiveValue::Set(params.name),
            last_name: ActiveValue::Set(params.last_name),
            license: ActiveValue::Set(params.license),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dentist::from_entity(dentist))
    }

    /// Merges the present fields of `params` onto the stored dentist and writes the result
    pub async fn update(&self, id: i32, params: UpdateDentistParams) -> Result<Dentist, DbErr> {
        let merged = self.complete_empty_attributes(id, params).await?;

        let dentist = entity::dentist::ActiveModel {
            id: ActiveValue::Unchanged(merged.id),
            name: ActiveValue::Set(merged.name),
            last_name: ActiveValue::Set(merged.last_name),
            license: ActiveValue::Set(merged.license),
        }
        .update(self.db)
        .await?;

        Ok(Dentist::from_entity(dentist))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Dentist::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn complete_empty_attributes(
        &self,
        id: i32,
        params: UpdateDentistParams,
    ) -> Result<Dentist, DbErr> {
        let current = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("dentist {} not found", id)))?;

        params.apply(current)
    }
}
