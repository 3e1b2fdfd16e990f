use super::*;

/// Tests the create, get, partial update, get sequence.
///
/// Expected: only the patched name differs between the two reads
#[tokio::test]
async fn patch_changes_only_supplied_fields() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DentistRepository::new(db.clone());
    let created = repo
        .create(CreateDentistParams {
            name: "Luis".to_string(),
            last_name: "Perez".to_string(),
            license: "MP-1234".to_string(),
        })
        .await?;
    let before = repo.get_by_id(created.id).await?;

    repo.update(
        created.id,
        UpdateDentistParams {
            name: Some("Luisa".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let after = repo.get_by_id(created.id).await?;
    assert_eq!(after.name, "Luisa");
    assert_eq!(after.last_name, before.last_name);
    assert_eq!(after.license, before.license);

    Ok(())
}

/// Tests taking over another dentist's license.
///
/// Expected: Err(BadRequest("license already exists"))
#[tokio::test]
async fn rejects_license_owned_by_other_dentist() -> Result<(), AppError> {
    let test = clinic().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dentist = factory::create_dentist(db).await?;
    let other = factory::create_dentist(db).await?;

    let err = DentistRepository::new(db.clone())
        .update(
            dentist.id,
            UpdateDentistParams {
                license: Some(other.license),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(bad_request(&err), Some("license already exists"));

    Ok(())
}
