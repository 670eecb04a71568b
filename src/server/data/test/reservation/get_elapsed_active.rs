use super::*;

/// Tests selecting reservations whose departure has been reached.
///
/// Expected: Ok with only the active reservation departing on or before today
#[tokio::test]
async fn selects_departed_active_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    let departs_today = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2025, 6, 1), date(2025, 6, 5))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2025, 6, 5), date(2025, 6, 6))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2025, 5, 1), date(2025, 5, 2))
        .state(ReservationState::Cancelled)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let elapsed = repo.get_elapsed_active(date(2025, 6, 5)).await?;

    assert_eq!(elapsed.len(), 1);
    assert_eq!(elapsed[0].id, departs_today.id);

    Ok(())
}
