use super::*;

/// Tests that a partial update only changes the supplied field.
///
/// Expected: Ok with the new last name and the original license
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dentist = factory::create_dentist(db).await?;

    let updated = DentistStore::new(db)
        .update(
            dentist.id,
            UpdateDentistParams {
                last_name: Some("Gomez".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.last_name, "Gomez");
    assert_eq!(updated.name, dentist.name);
    assert_eq!(updated.license, dentist.license);

    Ok(())
}

/// Tests that an explicitly empty license is written rather than ignored.
///
/// Expected: Ok with an empty license
#[tokio::test]
async fn applies_explicit_empty_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dentist = factory::create_dentist(db).await?;

    let updated = DentistStore::new(db)
        .update(
            dentist.id,
            UpdateDentistParams {
                license: Some(String::new()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.license, "");

    Ok(())
}
