use super::*;

/// Tests creating a patient with an ISO admission date.
///
/// Expected: Ok with an assigned id and the submitted fields readable by id
#[tokio::test]
async fn creates_patient_and_reads_it_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = PatientStore::new(db);
    let created = store.create(create_params(30111222)).await?;

    assert!(created.id > 0);
    assert_eq!(created.dni, 30111222);
    assert_eq!(
        created.admission_date,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );

    let fetched = store.get_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests that a day-first admission date is stored as the same calendar date.
///
/// Expected: Ok with admission_date 2024-03-09
#[tokio::test]
async fn accepts_day_first_admission_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = PatientStore::new(db);
    let created = store
        .create(CreatePatientParams {
            admission_date: "09-03-2024".to_string(),
            ..create_params(30111223)
        })
        .await?;

    assert_eq!(
        created.admission_date,
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    );

    Ok(())
}

/// Tests that an unparseable admission date fails before anything is written.
///
/// Expected: Err(DbErr::Custom) and no patient rows
#[tokio::test]
async fn fails_for_unparseable_admission_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PatientStore::new(db)
        .create(CreatePatientParams {
            admission_date: "2024-13-45".to_string(),
            ..create_params(30111224)
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert!(entity::prelude::Patient::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that the DNI unique constraint rejects a second patient.
///
/// Expected: Err from the insert
#[tokio::test]
async fn fails_for_duplicate_dni() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::patient::create_patient_with_dni(db, 30111225).await?;

    let result = PatientStore::new(db).create(create_params(30111225)).await;

    assert!(result.is_err());

    Ok(())
}
