//! Tour package listing.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use super::{AdminView, render, short_date};
use crate::{
    error::AppError, filters, middleware::LayoutAdmin, models::TourPackage, state::AppState,
};

/// Package row for the listing table.
#[derive(Debug, Clone)]
pub struct PackageView {
    pub title: String,
    pub slug: String,
    pub destination: String,
    pub category: String,
    pub price: String,
    pub duration: String,
    pub status: String,
    pub created: String,
}

impl From<&TourPackage> for PackageView {
    fn from(package: &TourPackage) -> Self {
        let duration = if package.duration_days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", package.duration_days)
        };

        Self {
            title: package.title.clone(),
            slug: package.slug.clone(),
            destination: package.destination_name.clone(),
            category: package.category_name.clone(),
            price: package.price.to_string(),
            duration,
            status: package.status.to_string(),
            created: short_date(&package.created_at),
        }
    }
}

/// Packages page template.
#[derive(Template)]
#[template(path = "packages.html")]
pub struct PackagesTemplate {
    pub admin_user: AdminView,
    pub current_path: String,
    pub packages: Vec<PackageView>,
}

/// Packages page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    LayoutAdmin(admin): LayoutAdmin,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let packages = state.catalog().list_packages().await?;

    Ok(render(&PackagesTemplate {
        admin_user: AdminView::from(&admin),
        current_path: "/admin/packages".to_string(),
        packages: packages.iter().map(PackageView::from).collect(),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use wanderlust_core::{
        CategoryId, CurrencyCode, DestinationId, PackageId, PackageStatus, Price,
    };

    use super::*;

    fn package(duration_days: i32) -> TourPackage {
        TourPackage {
            id: PackageId::generate(),
            title: "Komodo Sailing".to_string(),
            slug: "komodo-sailing".to_string(),
            destination_id: DestinationId::generate(),
            destination_name: "Flores".to_string(),
            category_id: CategoryId::generate(),
            category_name: "Adventure".to_string(),
            price: Price::new(Decimal::new(89_900, 2), CurrencyCode::USD),
            duration_days,
            status: PackageStatus::Published,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_package_view_formatting() {
        let view = PackageView::from(&package(3));
        assert_eq!(view.price, "$899.00");
        assert_eq!(view.duration, "3 days");
        assert_eq!(view.status, "published");
        assert_eq!(PackageView::from(&package(1)).duration, "1 day");
    }
}
