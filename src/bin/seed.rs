use chrono::{Duration, Utc};
use uuid::Uuid;
use warehouse_packing_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
    services::auth_service::hash_password,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 2).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let first = ensure_packer(&pool, "packer1", "packer1pass").await?;
    let second = ensure_packer(&pool, "packer2", "packer2pass").await?;
    seed_products(&pool).await?;
    let orders = seed_orders(&pool).await?;

    println!("Seed completed. Packers: {first}, {second}. Orders created: {orders}");
    Ok(())
}

async fn ensure_packer(pool: &DbPool, username: &str, password: &str) -> anyhow::Result<Uuid> {
    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, username, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    println!("Ensured packer {username}");
    Ok(id)
}

const PRODUCTS: [(&str, &str, &str); 4] = [
    ("Packing Tape 48mm", "TAPE-48", "https://cdn.example.com/tape-48.png"),
    ("Bubble Wrap Roll", "BUBBLE-1M", "https://cdn.example.com/bubble-1m.png"),
    ("Shipping Box Small", "BOX-S", "https://cdn.example.com/box-s.png"),
    ("Thermal Label 4x6", "LABEL-4X6", "https://cdn.example.com/label-4x6.png"),
];

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    for (name, sku, image) in PRODUCTS {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, sku, image)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (sku) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(sku)
        .bind(image)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_orders(pool: &DbPool) -> anyhow::Result<usize> {
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM orders")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        println!("Orders already present, skipping");
        return Ok(0);
    }

    let orders: [(&str, &str, &str, &str, &str, &str, &str, &[(&str, i32)]); 2] = [
        (
            "Ada",
            "Lovelace",
            "12 Analytical St",
            "Richmond",
            "VIC",
            "3121",
            "Australia",
            &[("TAPE-48", 5), ("BOX-S", 3)],
        ),
        (
            "Alan",
            "Turing",
            "4 Enigma Rd",
            "Fitzroy",
            "VIC",
            "3065",
            "Australia",
            &[("BUBBLE-1M", 2), ("LABEL-4X6", 10), ("TAPE-48", 1)],
        ),
    ];

    for (offset, (firstname, lastname, address, suburb, state, postcode, country, lines)) in
        orders.iter().enumerate()
    {
        let order_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO orders (id, firstname, lastname, address, suburb, state, postcode, country, date_placed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(order_id)
        .bind(*firstname)
        .bind(*lastname)
        .bind(*address)
        .bind(*suburb)
        .bind(*state)
        .bind(*postcode)
        .bind(*country)
        .bind(Utc::now() - Duration::hours(offset as i64 + 1))
        .execute(pool)
        .await?;

        for (sku, qty) in lines.iter() {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, qty)
                SELECT $1, $2, p.id, $3 FROM products p WHERE p.sku = $4
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(order_id)
            .bind(*qty)
            .bind(*sku)
            .execute(pool)
            .await?;
        }
    }

    println!("Seeded orders");
    Ok(orders.len())
}
