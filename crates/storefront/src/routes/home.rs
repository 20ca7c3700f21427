//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::db::{OfferingRepository, categories};
use crate::error::AppError;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::routes::offerings::OfferingCardView;
use crate::state::AppState;

/// Number of featured offerings shown on the home page.
const FEATURED_LIMIT: i64 = 6;

// =============================================================================
// Static Sections (hero, services, ordering process)
// =============================================================================

/// A ritual occasion highlighted in the services section.
#[derive(Clone)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// A step in the ordering process section.
#[derive(Clone)]
pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Hero banner configuration.
#[derive(Clone)]
pub struct HeroConfig {
    pub eyebrow: &'static str,
    pub title_leading: &'static str,
    pub title_highlight: &'static str,
    pub title_trailing: &'static str,
    pub title_highlight_alt: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            eyebrow: "Nền tảng dịch vụ mâm cúng #1 Việt Nam",
            title_leading: "Gìn giữ",
            title_highlight: "truyền thống",
            title_trailing: "Phong cách",
            title_highlight_alt: "hiện đại",
            subtitle: "Mâm Cúng Việt cung cấp dịch vụ mâm cúng trọn gói cho mọi dịp: \
                       đầy tháng, tân gia, khai trương, giỗ tổ tiên... Chuẩn phong tục, \
                       đẹp mắt, giao tận nơi.",
            primary_cta: "Đặt mâm cúng ngay",
            secondary_cta: "Xem catalog",
        }
    }
}

fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Đầy Tháng",
            description: "Mâm cúng đầy tháng, thôi nôi cho bé với đầy đủ lễ vật theo \
                          phong tục từng vùng miền.",
        },
        ServiceCard {
            title: "Tân Gia",
            description: "Mâm cúng nhập trạch, tân gia nhà mới với nghi thức chuẩn, \
                          mang may mắn cho gia chủ.",
        },
        ServiceCard {
            title: "Khai Trương",
            description: "Mâm cúng khai trương, động thổ cho doanh nghiệp, cầu mong \
                          làm ăn phát đạt, thuận lợi.",
        },
        ServiceCard {
            title: "Giỗ Tổ Tiên",
            description: "Mâm cúng giỗ ông bà, tổ tiên trang trọng, thể hiện lòng \
                          thành kính với người đã khuất.",
        },
    ]
}

fn process_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep {
            number: 1,
            title: "Chọn dịch vụ",
            description: "Duyệt qua danh mục mâm cúng theo dịp lễ và chọn gói phù hợp \
                          với nhu cầu.",
        },
        ProcessStep {
            number: 2,
            title: "Tùy chỉnh mâm",
            description: "Điều chỉnh các món theo sở thích, chọn kích thước và phong \
                          cách trang trí.",
        },
        ProcessStep {
            number: 3,
            title: "Thanh toán",
            description: "Thanh toán an toàn qua ví điện tử, chuyển khoản hoặc thẻ \
                          tín dụng.",
        },
        ProcessStep {
            number: 4,
            title: "Nhận mâm cúng",
            description: "Giao hàng đúng giờ theo lịch hẹn. Hỗ trợ bày biện và hướng \
                          dẫn nghi thức.",
        },
    ]
}

/// Category display data for the services strip.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub current_user: Option<CurrentUser>,
    pub hero: HeroConfig,
    pub services: Vec<ServiceCard>,
    pub steps: Vec<ProcessStep>,
    pub categories: Vec<CategoryView>,
    pub featured: Vec<OfferingCardView>,
}

/// Display the home page.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
) -> Result<impl IntoResponse, AppError> {
    let featured = OfferingRepository::new(state.pool())
        .list_featured(FEATURED_LIMIT)
        .await?;
    let categories = categories::list_all(state.pool()).await?;

    Ok(HomeTemplate {
        current_user,
        hero: HeroConfig::default(),
        services: service_cards(),
        steps: process_steps(),
        categories: categories
            .into_iter()
            .map(|c| CategoryView {
                name: c.name,
                description: c.description,
                icon: c.icon,
            })
            .collect(),
        featured: featured.iter().map(OfferingCardView::from_offering).collect(),
    })
}
