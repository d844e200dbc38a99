use sqlx::PgPool;
use std::sync::Arc;
use trade_in_pricing::domain::entities::NewSaleRecord;
use trade_in_pricing::domain::repositories::SaleRecordRepository;
use trade_in_pricing::infrastructure::persistence::PgSaleRecordRepository;

fn record(vin: &str, sale_year: i32, make: &str, sale_price: f64) -> NewSaleRecord {
    NewSaleRecord {
        vin: vin.to_string(),
        sale_year,
        make: make.to_string(),
        model: "ACCORD".to_string(),
        sale_price,
    }
}

async fn seeded(pool: PgPool) -> PgSaleRecordRepository {
    let repo = PgSaleRecordRepository::new(Arc::new(pool));
    let inserted = repo
        .insert_batch(vec![
            record("1HGCM82633A004301", 2003, "HOND", 4400.0),
            record("1HGCM82633A004302", 2003, "HOND", 4000.0),
            record("1hgcm82633a004303", 2004, "HOND", 4100.0),
            record("1HGCM82633A004304", 2006, "HOND", 3900.0),
            record("1HGCM82633A004305", 2003, "HOND", 0.0),
            record("1HGXX00003A000001", 2001, "HOND", 5000.0),
            record("1HGCM8", 2003, "HOND", 4500.0),
        ])
        .await
        .unwrap();
    assert_eq!(inserted, 7);
    repo
}

#[sqlx::test]
async fn test_find_by_vin_prefix_filters_and_orders(pool: PgPool) {
    let repo = seeded(pool).await;

    let rows = repo
        .find_by_vin_prefix("1hgcm826", 2003, 1, None)
        .await
        .unwrap();

    let prices: Vec<f64> = rows.iter().map(|r| r.sale_price).collect();
    // Exact year first, then by price; zero prices and out-of-range years dropped
    assert_eq!(prices, vec![4000.0, 4400.0, 4100.0]);
}

#[sqlx::test]
async fn test_find_by_vin_prefix_requires_full_prefix_length(pool: PgPool) {
    let repo = seeded(pool).await;

    let rows = repo
        .find_by_vin_prefix("1HGCM8", 2003, 2, Some(20))
        .await
        .unwrap();

    assert!(rows.iter().any(|r| r.vin == "1HGCM8"));

    let rows = repo
        .find_by_vin_prefix("1HGCM826", 2003, 2, None)
        .await
        .unwrap();

    assert!(rows.iter().all(|r| r.vin.len() >= 8));
}

#[sqlx::test]
async fn test_find_by_vin_prefix_limit(pool: PgPool) {
    let repo = seeded(pool).await;

    let rows = repo
        .find_by_vin_prefix("1HGCM8", 2003, 2, Some(2))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
}

#[sqlx::test]
async fn test_find_by_make(pool: PgPool) {
    let repo = seeded(pool).await;

    let rows = repo.find_by_make("HOND", 2003, 2, 50).await.unwrap();

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.vin.len() >= 8 && r.sale_price > 0.0));
    assert_eq!(rows[0].sale_year, 2003);
}

#[sqlx::test]
async fn test_null_vins_are_never_returned(pool: PgPool) {
    sqlx::query("INSERT INTO sale_records (vin, sale_year, make, sale_price) VALUES (NULL, 2003, 'HOND', 4000)")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgSaleRecordRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.find_by_make("HOND", 2003, 2, 50).await.unwrap().is_empty());
}
