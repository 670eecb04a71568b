use super::*;

/// Tests a bounded window against a reservation starting after it ends.
///
/// Expected: Ok(false) for window `[06-01, 06-05)` and a stay `[06-10, 06-12)`
#[tokio::test]
async fn bounded_window_ignores_later_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _hotel, room, _reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            date(2025, 6, 10),
            date(2025, 6, 12),
        )
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .has_active_in_window(
            room.id,
            OccupancyWindow {
                from: Some(date(2025, 6, 1)),
                until: Some(date(2025, 6, 5)),
            },
        )
        .await?;

    assert!(!occupied);

    Ok(())
}

/// Tests an open-ended window against a future reservation.
///
/// Expected: Ok(true) for window `[06-01, ∞)` and a stay `[06-10, 06-12)`
#[tokio::test]
async fn open_window_sees_later_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _hotel, room, _reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            date(2025, 6, 10),
            date(2025, 6, 12),
        )
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .has_active_in_window(room.id, OccupancyWindow::from(date(2025, 6, 1)))
        .await?;

    assert!(occupied);

    Ok(())
}

/// Tests that a stay departing on the window start does not occupy it.
///
/// Expected: Ok(false) for window `[06-05, ∞)` and a stay `[06-01, 06-05)`
#[tokio::test]
async fn departed_stay_does_not_occupy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _hotel, room, _reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            date(2025, 6, 1),
            date(2025, 6, 5),
        )
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .has_active_in_window(room.id, OccupancyWindow::from(date(2025, 6, 5)))
        .await?;

    assert!(!occupied);

    Ok(())
}

/// Tests that an unbounded window sees a departed stay still marked active.
///
/// Expected: Ok(true) for a stay `[06-01, 06-05)` that was never finished
#[tokio::test]
async fn unbounded_window_sees_departed_active_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _hotel, room, _reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            date(2025, 6, 1),
            date(2025, 6, 5),
        )
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .has_active_in_window(room.id, OccupancyWindow::unbounded())
        .await?;

    assert!(occupied);

    Ok(())
}
