use super::*;

/// Tests the booking walkthrough on a single room.
///
/// Books `[06-01, 06-05)`, then tries the overlapping `[06-03, 06-07)` and the touching
/// `[06-05, 06-08)`.
///
/// Expected: first booking Ok and room OCCUPIED, overlap fails with Conflict, touching
/// range Ok
#[tokio::test]
async fn books_rejects_overlap_and_accepts_touching_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    assert_eq!(room.status, RoomStatus::Available);

    let service = ReservationService::new(db);

    let first = service
        .check_and_reserve(reserve(user.id, room.id, date(2025, 6, 1), date(2025, 6, 5)))
        .await?;
    assert_eq!(first.state, ReservationState::Active);
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Occupied);

    let overlap = service
        .check_and_reserve(reserve(user.id, room.id, date(2025, 6, 3), date(2025, 6, 7)))
        .await;
    assert!(matches!(
        overlap,
        Err(AppError::BookingErr(BookingError::Conflict(_)))
    ));

    let touching = service
        .check_and_reserve(reserve(user.id, room.id, date(2025, 6, 5), date(2025, 6, 8)))
        .await?;
    assert_eq!(touching.room_id, Some(room.id));
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Occupied);

    Ok(())
}

/// Tests booking the same range twice.
///
/// Expected: first call Ok, second fails with Conflict
#[tokio::test]
async fn identical_second_booking_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;

    let service = ReservationService::new(db);
    let params = reserve(user.id, room.id, date(2025, 7, 10), date(2025, 7, 12));

    service.check_and_reserve(params.clone()).await?;
    let second = service.check_and_reserve(params).await;

    assert!(matches!(
        second,
        Err(AppError::BookingErr(BookingError::Conflict(_)))
    ));

    Ok(())
}

/// Tests that an empty or inverted range is rejected before touching storage.
///
/// Expected: Err(Validation) on departure_date for both cases, nothing persisted
#[tokio::test]
async fn rejects_empty_and_inverted_ranges() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;

    let service = ReservationService::new(db);
    for (entry, departure) in [
        (date(2025, 6, 5), date(2025, 6, 5)),
        (date(2025, 6, 5), date(2025, 6, 1)),
    ] {
        let result = service
            .check_and_reserve(reserve(user.id, room.id, entry, departure))
            .await;

        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::Validation { ref field, .. }))
                if field == "departure_date"
        ));
    }

    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Available);

    Ok(())
}

/// Tests booking a room that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = ReservationService::new(db)
        .check_and_reserve(reserve(user.id, 9999, date(2025, 6, 1), date(2025, 6, 2)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests attaching an extra service from another hotel.
///
/// Verifies the whole booking is rolled back: no reservation row and the room keeps its
/// status.
///
/// Expected: Err(Validation) on extra_service_ids with nothing persisted
#[tokio::test]
async fn rejects_extra_service_of_other_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    let own_service = factory::extra_service::create_extra_service(db, hotel.id).await?;
    let other_hotel = factory::hotel::create_hotel(db).await?;
    let foreign_service = factory::extra_service::create_extra_service(db, other_hotel.id).await?;

    let mut params = reserve(user.id, room.id, date(2025, 6, 1), date(2025, 6, 3));
    params.extra_service_ids = vec![own_service.id, foreign_service.id];

    let result = ReservationService::new(db).check_and_reserve(params).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::Validation { ref field, .. }))
            if field == "extra_service_ids"
    ));
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Available);

    Ok(())
}

/// Tests the total price of a booking with extras.
///
/// Three nights at 100.0 plus a 15.0 service and a 20.0 service.
///
/// Expected: Ok with total_price 335.0 and both services attached
#[tokio::test]
async fn computes_total_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hotel = factory::hotel::create_hotel(db).await?;
    let room = factory::room::RoomFactory::new(db, hotel.id)
        .price(100.0)
        .build()
        .await?;
    let breakfast = factory::extra_service::ExtraServiceFactory::new(db, hotel.id)
        .price(15.0)
        .build()
        .await?;
    let parking = factory::extra_service::ExtraServiceFactory::new(db, hotel.id)
        .price(20.0)
        .build()
        .await?;

    let mut params = reserve(user.id, room.id, date(2025, 6, 1), date(2025, 6, 4));
    params.extra_service_ids = vec![parking.id, breakfast.id];

    let reservation = ReservationService::new(db).check_and_reserve(params).await?;

    assert_eq!(reservation.total_price, 335.0);
    assert_eq!(reservation.extra_service_ids.len(), 2);
    assert_eq!(reservation.payment_status, "pending");

    Ok(())
}

/// Tests that an AVAILABLE room is still scanned under the default release policy.
///
/// The default policy can leave a room AVAILABLE while it holds a later reservation, so
/// the status alone can't be trusted.
///
/// Expected: Err(Conflict) against the active reservation on the AVAILABLE room
#[tokio::test]
async fn scans_available_room_under_default_policy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2025, 8, 10), date(2025, 8, 15))
        .build()
        .await?;

    let result = ReservationService::new(db)
        .check_and_reserve(reserve(user.id, room.id, date(2025, 8, 12), date(2025, 8, 14)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::Conflict(_)))
    ));

    Ok(())
}

/// Tests that the any-future policy trusts the AVAILABLE status.
///
/// Under that policy an AVAILABLE room holds no active reservation, so the overlap scan is
/// skipped. The inconsistent row here is arranged directly through the factory.
///
/// Expected: Ok booking on the AVAILABLE room
#[tokio::test]
async fn any_future_policy_skips_scan_for_available_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2025, 8, 10), date(2025, 8, 15))
        .build()
        .await?;

    let reservation = ReservationService::new(db)
        .with_release_policy(RoomReleasePolicy::AnyFuture)
        .check_and_reserve(reserve(user.id, room.id, date(2025, 8, 12), date(2025, 8, 14)))
        .await?;

    assert_eq!(reservation.room_id, Some(room.id));
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Occupied);

    Ok(())
}

/// Tests that the any-future policy keeps a room OCCUPIED for a departed stay that was
/// not finished yet.
///
/// Books `[06-01, 06-05)` and `[06-20, 06-25)`, cancels the later one on 06-10 before the
/// daily finisher ran, then books into the still-active early stay.
///
/// Expected: room stays OCCUPIED after the cancel and the overlapping booking fails with
/// Conflict
#[tokio::test]
async fn any_future_policy_rejects_overlap_with_unfinished_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    let requester = Requester {
        user_id: user.id,
        is_admin: false,
    };

    let service = ReservationService::new(db).with_release_policy(RoomReleasePolicy::AnyFuture);
    service
        .check_and_reserve(reserve(user.id, room.id, date(2025, 6, 1), date(2025, 6, 5)))
        .await?;
    let later = service
        .check_and_reserve(reserve(user.id, room.id, date(2025, 6, 20), date(2025, 6, 25)))
        .await?;

    service
        .cancel_on(later.id, requester, date(2025, 6, 10))
        .await?;

    assert_eq!(room_status(db, room.id).await?, RoomStatus::Occupied);

    let result = service
        .check_and_reserve(reserve(user.id, room.id, date(2025, 6, 2), date(2025, 6, 4)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::Conflict(_)))
    ));

    Ok(())
}
