use super::*;

/// Tests creating an appointment and reading it back with nested records.
///
/// Verifies the day-first date is stored as the same calendar date and the
/// description survives the round trip.
///
/// Expected: Ok with full patient and dentist attached on read
#[tokio::test]
async fn creates_appointment_with_nested_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;
    let dentist = factory::create_dentist(db).await?;

    let store = AppointmentStore::new(db);
    let id = store
        .create(CreateAppointmentParams {
            date: "10-03-2024".to_string(),
            hour: "09:15:00".to_string(),
            description: "Cleaning".to_string(),
            patient_id: patient.id,
            dentist_id: dentist.id,
        })
        .await?;

    let appointment = store.get_by_id(id).await?.unwrap();

    assert_eq!(appointment.date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    assert_eq!(appointment.hour, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    assert_eq!(appointment.description, "Cleaning");
    assert_eq!(appointment.patient.dni, patient.dni);
    assert_eq!(appointment.dentist.license, dentist.license);

    Ok(())
}

/// Tests reading an appointment id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(AppointmentStore::new(db).get_by_id(42).await?.is_none());

    Ok(())
}
