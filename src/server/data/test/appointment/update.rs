use super::*;

/// Tests a partial update that keeps the references.
///
/// Expected: Ok with no change flags and only the description replaced
#[tokio::test]
async fn updates_description_without_relinking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (patient, dentist, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let change = AppointmentStore::new(db)
        .update(
            appointment.id,
            UpdateAppointmentParams {
                description: Some("Root canal".to_string()),
                patient_id: Some(patient.id),
                ..Default::default()
            },
        )
        .await?;

    assert!(!change.patient_changed);
    assert!(!change.dentist_changed);
    assert_eq!(change.appointment.description, "Root canal");
    assert_eq!(change.appointment.date, appointment.date);
    assert_eq!(change.appointment.patient.dni, patient.dni);
    assert_eq!(change.appointment.dentist.license, dentist.license);

    Ok(())
}

/// Tests relinking an appointment to another dentist.
///
/// Expected: Ok with dentist_changed set, an id-only dentist, and the new
/// foreign key persisted
#[tokio::test]
async fn flags_relinked_dentist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    let new_dentist = factory::create_dentist(db).await?;

    let store = AppointmentStore::new(db);
    let change = store
        .update(
            appointment.id,
            UpdateAppointmentParams {
                dentist_id: Some(new_dentist.id),
                hour: Some("16:45:00".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(change.dentist_changed);
    assert!(!change.patient_changed);
    assert_eq!(change.appointment.dentist.id, new_dentist.id);
    assert!(change.appointment.dentist.license.is_empty());

    let stored = store.get_by_id(appointment.id).await?.unwrap();
    assert_eq!(stored.dentist.license, new_dentist.license);
    assert_eq!(stored.hour, NaiveTime::from_hms_opt(16, 45, 0).unwrap());

    Ok(())
}

/// Tests updating an appointment that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AppointmentStore::new(db)
        .update(7, UpdateAppointmentParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
