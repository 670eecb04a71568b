use super::*;

/// Tests pagination metadata.
///
/// Expected: Ok with five hotels over three pages of two
#[tokio::test]
async fn computes_total_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::hotel::create_hotel(db).await?;
    }

    let page = HotelService::new(db).get_paginated(2, 2).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
    assert_eq!(page.hotels.len(), 1);

    Ok(())
}

/// Tests rejecting a zero page size.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_zero_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelService::new(db).get_paginated(0, 0).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
