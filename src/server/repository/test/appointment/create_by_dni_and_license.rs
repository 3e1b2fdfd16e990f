use super::*;

/// Tests creating an appointment from natural keys.
///
/// Expected: Ok with the patient owning the DNI and the dentist owning the license
#[tokio::test]
async fn links_patient_and_dentist_by_natural_keys() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::patient::create_patient_with_dni(db, 123).await?;
    let dentist = factory::dentist::create_dentist_with_license(db, "MP-9").await?;

    let created = AppointmentRepository::new(db.clone())
        .create_by_dni_and_license(123, "MP-9", create_params(0, 0))
        .await?;

    assert_eq!(created.patient.id, patient.id);
    assert_eq!(created.dentist.id, dentist.id);

    Ok(())
}

/// Tests creating an appointment for a DNI nobody owns.
///
/// Expected: Err(NotFound("patient with dni 123 not found")) and nothing inserted
#[tokio::test]
async fn unknown_dni_inserts_nothing() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::dentist::create_dentist_with_license(db, "MP-9").await?;

    let err = AppointmentRepository::new(db.clone())
        .create_by_dni_and_license(123, "MP-9", create_params(0, 0))
        .await
        .unwrap_err();

    assert_eq!(not_found(&err), Some("patient with dni 123 not found"));
    assert_eq!(entity::prelude::Appointment::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating an appointment for a license nobody holds.
///
/// Expected: Err(NotFound("dentist with license MP-0 not found")) and nothing inserted
#[tokio::test]
async fn unknown_license_inserts_nothing() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::patient::create_patient_with_dni(db, 123).await?;

    let err = AppointmentRepository::new(db.clone())
        .create_by_dni_and_license(123, "MP-0", create_params(0, 0))
        .await
        .unwrap_err();

    assert_eq!(not_found(&err), Some("dentist with license MP-0 not found"));
    assert_eq!(entity::prelude::Appointment::find().count(db).await?, 0);

    Ok(())
}
