use super::*;

/// Tests finishing elapsed reservations and re-deriving room status.
///
/// Room A only holds a stay departing today. Room B holds one departing today and one
/// starting later. A future stay on room B and a cancelled past stay are left alone.
///
/// Expected: Ok(2) with room A AVAILABLE and room B OCCUPIED
#[tokio::test]
async fn finishes_departed_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::create_hotel(db).await?;
    let room_a = factory::room::RoomFactory::new(db, hotel.id)
        .status(RoomStatus::Occupied)
        .build()
        .await?;
    let room_b = factory::room::RoomFactory::new(db, hotel.id)
        .status(RoomStatus::Occupied)
        .build()
        .await?;

    let elapsed_a = factory::reservation::ReservationFactory::new(db, user.id, room_a.id)
        .dates(date(2025, 6, 1), date(2025, 6, 5))
        .build()
        .await?;
    let elapsed_b = factory::reservation::ReservationFactory::new(db, user.id, room_b.id)
        .dates(date(2025, 6, 2), date(2025, 6, 4))
        .build()
        .await?;
    let upcoming_b = factory::reservation::ReservationFactory::new(db, user.id, room_b.id)
        .dates(date(2025, 6, 8), date(2025, 6, 10))
        .build()
        .await?;
    let cancelled = factory::reservation::ReservationFactory::new(db, user.id, room_a.id)
        .dates(date(2025, 5, 1), date(2025, 5, 3))
        .state(ReservationState::Cancelled)
        .build()
        .await?;

    let finished = ReservationService::new(db)
        .finish_elapsed(date(2025, 6, 5))
        .await?;

    assert_eq!(finished, 2);
    for id in [elapsed_a.id, elapsed_b.id] {
        assert!(is_state(
            &stored_reservation(db, id).await?,
            ReservationState::Finished
        ));
    }
    assert!(is_state(
        &stored_reservation(db, upcoming_b.id).await?,
        ReservationState::Active
    ));
    assert!(is_state(
        &stored_reservation(db, cancelled.id).await?,
        ReservationState::Cancelled
    ));
    assert_eq!(room_status(db, room_a.id).await?, RoomStatus::Available);
    assert_eq!(room_status(db, room_b.id).await?, RoomStatus::Occupied);

    Ok(())
}

/// Tests that nothing happens when no stay has elapsed.
///
/// Expected: Ok(0)
#[tokio::test]
async fn does_nothing_without_elapsed_stays() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 10),
        date(2025, 6, 12),
    )
    .await?;

    let finished = ReservationService::new(db)
        .finish_elapsed(date(2025, 6, 5))
        .await?;

    assert_eq!(finished, 0);

    Ok(())
}
