use super::*;

/// Tests finding a patient by DNI.
///
/// Expected: Ok(Some) for the owner, Ok(None) for an unused DNI
#[tokio::test]
async fn finds_patient_by_dni() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::patient::create_patient_with_dni(db, 28999111).await?;
    factory::create_patient(db).await?;

    let store = PatientStore::new(db);

    let found = store.get_by_dni(28999111).await?;
    assert_eq!(found.map(|p| p.id), Some(patient.id));

    let missing = store.get_by_dni(1).await?;
    assert!(missing.is_none());

    Ok(())
}
