use super::*;

/// Tests the create, get, partial update, get sequence.
///
/// Expected: only the patched email differs between the two reads
#[tokio::test]
async fn patch_changes_only_supplied_fields() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatientRepository::new(db.clone());
    let created = repo.create(create_params(30111222)).await?;
    let before = repo.get_by_id(created.id).await?;

    repo.update(
        created.id,
        UpdatePatientParams {
            email: Some("x@y.com".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let after = repo.get_by_id(created.id).await?;
    assert_eq!(after.email, "x@y.com");
    assert_eq!(
        after,
        crate::server::model::patient::Patient {
            email: "x@y.com".to_string(),
            ..before
        }
    );

    Ok(())
}

/// Tests that an omitted DNI is kept and an explicit one is applied.
///
/// Expected: DNI unchanged after the first update, replaced after the second
#[tokio::test]
async fn distinguishes_absent_and_explicit_dni() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::patient::create_patient_with_dni(db, 30111222).await?;
    let repo = PatientRepository::new(db.clone());

    let kept = repo
        .update(
            patient.id,
            UpdatePatientParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(kept.dni, 30111222);

    let replaced = repo
        .update(
            patient.id,
            UpdatePatientParams {
                dni: Some(0),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(replaced.dni, 0);

    Ok(())
}

/// Tests updating a patient to its own DNI and to another patient's DNI.
///
/// Expected: Ok for its own DNI, Err(BadRequest("dni already exists")) otherwise
#[tokio::test]
async fn rejects_dni_owned_by_other_patient() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::patient::create_patient_with_dni(db, 30111222).await?;
    let other = factory::patient::create_patient_with_dni(db, 30111333).await?;
    let repo = PatientRepository::new(db.clone());

    let same = repo
        .update(
            patient.id,
            UpdatePatientParams {
                dni: Some(30111222),
                ..Default::default()
            },
        )
        .await;
    assert!(same.is_ok());

    let err = repo
        .update(
            patient.id,
            UpdatePatientParams {
                dni: Some(other.dni),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(bad_request(&err), Some("dni already exists"));
    assert_eq!(repo.get_by_id(patient.id).await?.dni, 30111222);

    Ok(())
}

/// Tests updating a patient id that does not exist.
///
/// Expected: Err(NotFound("patient 404 not found"))
#[tokio::test]
async fn reports_missing_patient() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = PatientRepository::new(db.clone())
        .update(404, UpdatePatientParams::default())
        .await
        .unwrap_err();

    assert_eq!(not_found(&err), Some("patient 404 not found"));

    Ok(())
}
