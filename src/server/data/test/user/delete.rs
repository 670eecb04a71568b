use super::*;

/// Tests deleting a user cascades to their reservations.
///
/// Expected: Ok with user and reservation removed
#[tokio::test]
async fn cascades_to_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            factory::helpers::days_from_today(1),
            factory::helpers::days_from_today(3),
        )
        .await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
