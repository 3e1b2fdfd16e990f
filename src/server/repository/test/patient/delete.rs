use super::*;

/// Tests deleting an unreferenced patient, then deleting it again.
///
/// Expected: Ok, then Err(NotFound("patient <id> not found"))
#[tokio::test]
async fn deletes_patient_once() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;
    let repo = PatientRepository::new(db.clone());

    repo.delete(patient.id).await?;

    let err = repo.delete(patient.id).await.unwrap_err();
    let expected = format!("patient {} not found", patient.id);
    assert_eq!(not_found(&err), Some(expected.as_str()));

    Ok(())
}

/// Tests deleting a patient that an appointment references.
///
/// Expected: Err(BadRequest("patient <id> has appointments")) and both rows kept
#[tokio::test]
async fn rejects_patient_with_appointments() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (patient, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let err = PatientRepository::new(db.clone())
        .delete(patient.id)
        .await
        .unwrap_err();

    let expected = format!("patient {} has appointments", patient.id);
    assert_eq!(bad_request(&err), Some(expected.as_str()));
    assert!(entity::prelude::Patient::find_by_id(patient.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Appointment::find_by_id(appointment.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
