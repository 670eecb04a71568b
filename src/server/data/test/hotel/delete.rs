use super::*;

/// Tests deleting a hotel cascades to its extra services.
///
/// Expected: Ok with hotel and extra services removed
#[tokio::test]
async fn cascades_to_extra_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let service = factory::extra_service::create_extra_service(db, hotel.id).await?;

    let repo = HotelRepository::new(db);
    repo.delete(hotel.id).await?;

    assert!(repo.find_by_id(hotel.id).await?.is_none());
    assert!(entity::prelude::ExtraService::find_by_id(service.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
