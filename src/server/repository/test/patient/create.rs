use super::*;

/// Tests that a created patient is readable by id with the submitted values.
///
/// Expected: Ok with identical patient on read
#[tokio::test]
async fn creates_and_gets_patient() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatientRepository::new(db.clone());
    let created = repo.create(create_params(30111222)).await?;

    assert!(created.id > 0);
    assert_eq!(repo.get_by_id(created.id).await?, created);

    Ok(())
}

/// Tests creating a second patient with an existing DNI.
///
/// Expected: Err(BadRequest("dni already exists")) and the first row untouched
#[tokio::test]
async fn rejects_duplicate_dni() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatientRepository::new(db.clone());
    let first = repo.create(create_params(30111222)).await?;

    let err = repo
        .create(CreatePatientParams {
            name: "Other".to_string(),
            ..create_params(30111222)
        })
        .await
        .unwrap_err();

    assert_eq!(bad_request(&err), Some("dni already exists"));
    assert_eq!(repo.get_by_id(first.id).await?, first);
    assert_eq!(entity::prelude::Patient::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests that an unparseable admission date is reported as a storage failure.
///
/// Expected: Err(BadRequest("error creating patient"))
#[tokio::test]
async fn reports_storage_failure() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = PatientRepository::new(db.clone())
        .create(CreatePatientParams {
            admission_date: "2024-13-45".to_string(),
            ..create_params(30111222)
        })
        .await
        .unwrap_err();

    assert_eq!(bad_request(&err), Some("error creating patient"));

    Ok(())
}

/// Tests reading a patient id that does not exist.
///
/// Expected: Err(NotFound("patient 99 not found"))
#[tokio::test]
async fn get_reports_missing_patient() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = PatientRepository::new(db.clone())
        .get_by_id(99)
        .await
        .unwrap_err();

    assert_eq!(not_found(&err), Some("patient 99 not found"));

    Ok(())
}
