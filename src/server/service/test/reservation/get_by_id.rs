use super::*;

/// Tests reservation visibility.
///
/// Expected: Ok for the owner and an admin, Err(AccessDenied) for another user
#[tokio::test]
async fn visible_to_owner_and_admin_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _hotel, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            date(2025, 9, 1),
            date(2025, 9, 3),
        )
        .await?;
    let stranger = factory::user::create_user(db).await?;

    let service = ReservationService::new(db);

    let own = service
        .get_by_id(
            reservation.id,
            Requester {
                user_id: owner.id,
                is_admin: false,
            },
        )
        .await?;
    assert_eq!(own.id, reservation.id);

    let as_admin = service
        .get_by_id(
            reservation.id,
            Requester {
                user_id: stranger.id,
                is_admin: true,
            },
        )
        .await?;
    assert_eq!(as_admin.user_id, owner.id);

    let denied = service
        .get_by_id(
            reservation.id,
            Requester {
                user_id: stranger.id,
                is_admin: false,
            },
        )
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
