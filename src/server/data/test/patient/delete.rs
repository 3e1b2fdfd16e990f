use super::*;

/// Tests deleting a patient by ID.
///
/// Expected: Ok(1) and the row gone; a second delete affects nothing
#[tokio::test]
async fn deletes_patient_and_reports_rows_affected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;
    let store = PatientStore::new(db);

    assert_eq!(store.delete(patient.id).await?, 1);
    assert!(store.get_by_id(patient.id).await?.is_none());
    assert_eq!(store.delete(patient.id).await?, 0);

    Ok(())
}
