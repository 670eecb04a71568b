use super::*;

/// Tests looking a user up by email ignoring case.
///
/// Expected: Ok(Some) for differently cased email, Ok(None) for unknown email
#[tokio::test]
async fn matches_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("guest@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email(" Guest@Example.com ").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(repo.email_exists("GUEST@example.com").await?);

    Ok(())
}
