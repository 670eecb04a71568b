use super::*;

/// Tests choosing the lowest-id qualifying room.
///
/// Rooms of another type, another hotel, `OCCUPIED` rooms and excluded rooms are skipped.
///
/// Expected: Ok(Some) with the first available room of the same type and hotel
#[tokio::test]
async fn picks_lowest_qualifying_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let other_hotel = factory::hotel::create_hotel(db).await?;

    let deleted = factory::room::create_room(db, hotel.id).await?;
    let excluded = factory::room::create_room(db, hotel.id).await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .tipo("suite")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .status(RoomStatus::Occupied)
        .build()
        .await?;
    factory::room::create_room(db, other_hotel.id).await?;
    let expected = factory::room::create_room(db, hotel.id).await?;
    factory::room::create_room(db, hotel.id).await?;

    let repo = RoomRepository::new(db);
    let replacement = repo
        .find_replacement(hotel.id, "doble", &[deleted.id, excluded.id])
        .await?;

    assert_eq!(replacement.map(|r| r.id), Some(expected.id));

    Ok(())
}

/// Tests that no room qualifies when every candidate is excluded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_candidates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, room) = factory::helpers::create_room_with_hotel(db).await?;

    let repo = RoomRepository::new(db);
    let replacement = repo.find_replacement(hotel.id, "doble", &[room.id]).await?;

    assert!(replacement.is_none());

    Ok(())
}
