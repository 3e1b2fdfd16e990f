use super::*;

/// Tests deleting an appointment, then deleting it again.
///
/// Expected: Ok, then Err(NotFound("appointment <id> not found"))
#[tokio::test]
async fn deletes_appointment_once() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    let repo = AppointmentRepository::new(db.clone());

    repo.delete(appointment.id).await?;

    let err = repo.delete(appointment.id).await.unwrap_err();
    let expected = format!("appointment {} not found", appointment.id);
    assert_eq!(not_found(&err), Some(expected.as_str()));

    Ok(())
}
