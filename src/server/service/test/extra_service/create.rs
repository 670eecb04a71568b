use super::*;

/// Tests creating and listing extra services of a hotel.
///
/// Expected: Ok with the service listed under its hotel only
#[tokio::test]
async fn creates_service_for_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let other_hotel = factory::hotel::create_hotel(db).await?;

    let service = ExtraServiceService::new(db);
    let created = service
        .create(CreateExtraServiceParams {
            hotel_id: hotel.id,
            name: "Desayuno".to_string(),
            price: 12.5,
        })
        .await?;

    let listed = service.get_by_hotel(hotel.id).await?;
    assert_eq!(listed, vec![created]);
    assert!(service.get_by_hotel(other_hotel.id).await?.is_empty());

    Ok(())
}

/// Tests creating a service for a hotel that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ExtraServiceService::new(db)
        .create(CreateExtraServiceParams {
            hotel_id: 12,
            name: "Spa".to_string(),
            price: 30.0,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
