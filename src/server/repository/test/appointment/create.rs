use super::*;

/// Tests that a created appointment round-trips with nested records.
///
/// Expected: Ok with the same appointment returned by get_by_id
#[tokio::test]
async fn creates_and_gets_appointment() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;
    let dentist = factory::create_dentist(db).await?;
    let repo = AppointmentRepository::new(db.clone());

    let created = repo.create(create_params(patient.id, dentist.id)).await?;

    assert!(created.id > 0);
    assert_eq!(created.description, "Checkup");
    assert_eq!(created.patient.dni, patient.dni);
    assert_eq!(created.dentist.license, dentist.license);
    assert_eq!(repo.get_by_id(created.id).await?, created);

    Ok(())
}

/// Tests creating an appointment for a patient id that does not exist.
///
/// Expected: Err(NotFound("patient 3000 not found")) and no appointment rows
#[tokio::test]
async fn rejects_unknown_patient() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dentist = factory::create_dentist(db).await?;

    let err = AppointmentRepository::new(db.clone())
        .create(create_params(3000, dentist.id))
        .await
        .unwrap_err();

    assert_eq!(not_found(&err), Some("patient 3000 not found"));
    assert_eq!(entity::prelude::Appointment::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating an appointment for a dentist id that does not exist.
///
/// Expected: Err(NotFound("dentist 4000 not found"))
#[tokio::test]
async fn rejects_unknown_dentist() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;

    let err = AppointmentRepository::new(db.clone())
        .create(create_params(patient.id, 4000))
        .await
        .unwrap_err();

    assert_eq!(not_found(&err), Some("dentist 4000 not found"));

    Ok(())
}
