use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Lucía".to_string(),
        email: email.to_string(),
        admin: false,
    }
}

/// Tests registering a user and rejecting a repeated email.
///
/// Expected: Ok for the first registration, Err(Conflict) for the same email in
/// different case
#[tokio::test]
async fn rejects_registered_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.create(params("lucia@example.com")).await?;
    assert!(!user.admin);

    let duplicate = service.create(params("LUCIA@example.com")).await;
    assert!(matches!(
        duplicate,
        Err(AppError::BookingErr(BookingError::Conflict(_)))
    ));

    Ok(())
}

/// Tests rejecting a malformed email.
///
/// Expected: Err(Validation) on email
#[tokio::test]
async fn rejects_invalid_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).create(params("not-an-email")).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::Validation { ref field, .. })) if field == "email"
    ));

    Ok(())
}

/// Tests logging in by email.
///
/// Expected: Ok for a registered email, Err(UnknownEmail) otherwise
#[tokio::test]
async fn logs_in_registered_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.create(params("marta@example.com")).await?;

    assert_eq!(service.login("Marta@Example.com").await?.id, user.id);
    assert!(matches!(
        service.login("ghost@example.com").await,
        Err(AppError::AuthErr(AuthError::UnknownEmail(_)))
    ));

    Ok(())
}
