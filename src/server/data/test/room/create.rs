use super::*;

/// Tests creating a room.
///
/// Verifies that new rooms always start `AVAILABLE`.
///
/// Expected: Ok with room stored as AVAILABLE
#[tokio::test]
async fn creates_available_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParams {
            hotel_id: hotel.id,
            tipo: "doble".to_string(),
            capacity: 2,
            price: 100.0,
            number: "101".to_string(),
        })
        .await?;

    assert_eq!(room.status, RoomStatus::Available);
    assert_eq!(room.hotel_id, hotel.id);
    assert_eq!(repo.find_by_id(room.id).await?, Some(room));

    Ok(())
}
