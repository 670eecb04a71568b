use super::*;

/// Tests that an intersecting range is detected.
///
/// Expected: Ok(true) for `[06-03, 06-07)` against an active `[06-01, 06-05)`
#[tokio::test]
async fn detects_intersecting_range() -> Result<(), DbErr> {
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
    let overlap = repo
        .has_active_overlap(room.id, date(2025, 6, 3), date(2025, 6, 7), None)
        .await?;

    assert!(overlap);

    Ok(())
}

/// Tests that ranges touching at the boundary do not overlap.
///
/// A stay departing on 06-05 frees the room for a stay entering on 06-05.
///
/// Expected: Ok(false) on both sides of the boundary
#[tokio::test]
async fn ignores_touching_ranges() -> Result<(), DbErr> {
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

    assert!(!repo
        .has_active_overlap(room.id, date(2025, 6, 5), date(2025, 6, 8), None)
        .await?);
    assert!(!repo
        .has_active_overlap(room.id, date(2025, 5, 28), date(2025, 6, 1), None)
        .await?);

    Ok(())
}

/// Tests that cancelled and finished reservations never block a range.
///
/// Expected: Ok(false) when only non-active reservations overlap
#[tokio::test]
async fn ignores_inactive_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    for state in [ReservationState::Cancelled, ReservationState::Finished] {
        factory::reservation::ReservationFactory::new(db, user.id, room.id)
            .dates(date(2025, 6, 1), date(2025, 6, 5))
            .state(state)
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let overlap = repo
        .has_active_overlap(room.id, date(2025, 6, 2), date(2025, 6, 4), None)
        .await?;

    assert!(!overlap);

    Ok(())
}

/// Tests that the excluded reservation is skipped.
///
/// Expected: Ok(false) when the only overlapping reservation is excluded
#[tokio::test]
async fn skips_excluded_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _hotel, room, reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            date(2025, 6, 1),
            date(2025, 6, 5),
        )
        .await?;

    let repo = ReservationRepository::new(db);
    let overlap = repo
        .has_active_overlap(
            room.id,
            date(2025, 6, 1),
            date(2025, 6, 5),
            Some(reservation.id),
        )
        .await?;

    assert!(!overlap);

    Ok(())
}
