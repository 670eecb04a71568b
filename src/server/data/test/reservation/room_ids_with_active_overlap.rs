use super::*;

/// Tests collecting rooms with overlapping active reservations.
///
/// Verifies that rooms of any type with an overlapping active reservation are returned,
/// while the excluded reservation, non-overlapping stays and cancelled stays are not.
///
/// Expected: Ok with only the conflicting room
#[tokio::test]
async fn collects_conflicting_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::create_hotel(db).await?;
    let own_room = factory::room::create_room(db, hotel.id).await?;
    let busy_room = factory::room::RoomFactory::new(db, hotel.id)
        .tipo("suite")
        .build()
        .await?;
    let later_room = factory::room::create_room(db, hotel.id).await?;
    let cancelled_room = factory::room::create_room(db, hotel.id).await?;

    let own = factory::reservation::ReservationFactory::new(db, user.id, own_room.id)
        .dates(date(2025, 6, 1), date(2025, 6, 5))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, busy_room.id)
        .dates(date(2025, 6, 4), date(2025, 6, 9))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, later_room.id)
        .dates(date(2025, 6, 5), date(2025, 6, 9))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, cancelled_room.id)
        .dates(date(2025, 6, 2), date(2025, 6, 3))
        .state(ReservationState::Cancelled)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let room_ids = repo
        .room_ids_with_active_overlap(own.date_entry, own.departure_date, own.id)
        .await?;

    assert_eq!(room_ids.into_iter().collect::<Vec<_>>(), vec![busy_room.id]);

    Ok(())
}
