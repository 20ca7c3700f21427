//! Database seeding command.
//!
//! Inserts a demo supplier, three categories, and three offerings. Every
//! row carries a fixed UUID and the inserts use `ON CONFLICT DO NOTHING`,
//! so the command can be re-run safely.

use sqlx::PgPool;
use tracing::info;
use uuid::{Uuid, uuid};

use super::database_url;

const SUPPLIER_ID: Uuid = uuid!("a1000000-0000-0000-0000-000000000001");

const CATEGORY_DAY_THANG: Uuid = uuid!("c1000000-0000-0000-0000-000000000001");
const CATEGORY_TAN_GIA: Uuid = uuid!("c1000000-0000-0000-0000-000000000002");
const CATEGORY_KHAI_TRUONG: Uuid = uuid!("c1000000-0000-0000-0000-000000000003");

const OFFERING_TIEU_CHUAN: Uuid = uuid!("0f000000-0000-0000-0000-000000000001");
const OFFERING_CAO_CAP: Uuid = uuid!("0f000000-0000-0000-0000-000000000002");
const OFFERING_DAC_BIET: Uuid = uuid!("0f000000-0000-0000-0000-000000000003");

/// Seed the database with demo data.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = database_url()?;

    info!("Connecting to storefront database...");
    let pool = PgPool::connect(&database_url).await?;

    seed_supplier(&pool).await?;
    seed_categories(&pool).await?;
    seed_offerings(&pool).await?;

    info!("Seeding complete!");
    Ok(())
}

async fn seed_supplier(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO profiles (id, email, full_name, phone, address)
         VALUES ($1, 'supplier@mamcungviet.vn', 'Cơ sở Mâm Cúng Việt',
                 '0901234567', '25 Nguyễn Trãi, Quận 5, TP.HCM')
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(SUPPLIER_ID)
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO user_roles (user_id, role)
         VALUES ($1, 'supplier')
         ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(SUPPLIER_ID)
    .execute(pool)
    .await?;

    info!("Seeded demo supplier");
    Ok(())
}

async fn seed_categories(pool: &PgPool) -> Result<(), sqlx::Error> {
    let categories = [
        (
            CATEGORY_DAY_THANG,
            "Đầy Tháng",
            "Mâm cúng đầy tháng, thôi nôi cho bé",
        ),
        (
            CATEGORY_TAN_GIA,
            "Tân Gia",
            "Mâm cúng nhập trạch, tân gia nhà mới",
        ),
        (
            CATEGORY_KHAI_TRUONG,
            "Khai Trương",
            "Mâm cúng khai trương, động thổ",
        ),
    ];

    for (id, name, description) in categories {
        sqlx::query(
            "INSERT INTO categories (id, name, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }

    info!("Seeded categories");
    Ok(())
}

async fn seed_offerings(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Gói Tiêu Chuẩn: 800.000đ
    sqlx::query(
        "INSERT INTO offerings (
            id, supplier_id, category_id, name, short_description, description,
            price, items, is_approved, is_featured
         )
         VALUES ($1, $2, $3,
                 'Mâm Cúng Đầy Tháng - Gói Tiêu Chuẩn',
                 'Đầy đủ lễ vật cơ bản theo phong tục',
                 'Mâm cúng đầy tháng với các lễ vật cơ bản, chuẩn phong tục ba miền.',
                 800000,
                 ARRAY['Xôi gấc', 'Chè đậu trắng', 'Gà luộc', 'Trầu cau', 'Hoa tươi'],
                 TRUE, FALSE)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(OFFERING_TIEU_CHUAN)
    .bind(SUPPLIER_ID)
    .bind(CATEGORY_DAY_THANG)
    .execute(pool)
    .await?;

    // Gói Cao Cấp: 1.500.000đ, giảm từ 1.800.000đ, nổi bật
    sqlx::query(
        "INSERT INTO offerings (
            id, supplier_id, category_id, name, short_description, description,
            price, original_price, items, is_approved, is_featured
         )
         VALUES ($1, $2, $3,
                 'Mâm Cúng Tân Gia - Gói Cao Cấp',
                 'Lễ vật đầy đủ, trang trí đẹp mắt',
                 'Mâm cúng tân gia cao cấp với mâm ngũ quả tươi, heo quay miếng và trang trí theo yêu cầu.',
                 1500000, 1800000,
                 ARRAY['Mâm ngũ quả tươi', 'Heo quay miếng', 'Xôi gấc', 'Bánh hỏi', 'Rượu nếp', 'Hoa cúc'],
                 TRUE, TRUE)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(OFFERING_CAO_CAP)
    .bind(SUPPLIER_ID)
    .bind(CATEGORY_TAN_GIA)
    .execute(pool)
    .await?;

    // Gói Đặc Biệt: 3.000.000đ
    sqlx::query(
        "INSERT INTO offerings (
            id, supplier_id, category_id, name, short_description, description,
            price, items, is_approved, is_featured
         )
         VALUES ($1, $2, $3,
                 'Mâm Cúng Khai Trương - Gói Đặc Biệt',
                 'Trọn gói cho doanh nghiệp, có heo quay nguyên con',
                 'Mâm cúng khai trương đặc biệt dành cho doanh nghiệp, heo quay nguyên con và đội ngũ hỗ trợ bày biện tận nơi.',
                 3000000,
                 ARRAY['Heo quay nguyên con', 'Mâm ngũ quả', 'Xôi chè', 'Gà trống luộc', 'Bánh bao', 'Vàng mã'],
                 TRUE, FALSE)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(OFFERING_DAC_BIET)
    .bind(SUPPLIER_ID)
    .bind(CATEGORY_KHAI_TRUONG)
    .execute(pool)
    .await?;

    info!("Seeded offerings");
    Ok(())
}
