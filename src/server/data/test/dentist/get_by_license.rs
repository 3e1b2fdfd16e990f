use super::*;

/// Tests finding a dentist by license.
///
/// Expected: Ok(Some) for the owner, Ok(None) for an unused license
#[tokio::test]
async fn finds_dentist_by_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dentist = factory::dentist::create_dentist_with_license(db, "MP-77").await?;
    let store = DentistStore::new(db);

    let found = store.get_by_license("MP-77").await?;
    assert_eq!(found.map(|d| d.id), Some(dentist.id));
    assert!(store.get_by_license("MP-78").await?.is_none());

    Ok(())
}
