//! Traits shared by every clinic resource.
//!
//! Patients, dentists and appointments are the same validated CRUD resource over one
//! table each. These traits capture the parts that only differ by field set: the
//! resource name used in messages and the partial-update merge.

use sea_orm::DbErr;

/// A named CRUD resource.
pub trait Resource {
    /// Lowercase singular name used in client-facing messages (`"patient"`).
    const NAME: &'static str;
}

/// A partial update that can be overlaid onto the current value of a resource.
///
/// Only fields present in the partial are applied; absent fields keep the stored value.
pub trait Patch<T> {
    /// Merges `self` onto `current`.
    ///
    /// # Returns
    /// - `Ok(T)` - The merged value
    /// - `Err(DbErr::Custom)` - A present field could not be converted for persistence
    fn apply(self, current: T) -> Result<T, DbErr>;
}
