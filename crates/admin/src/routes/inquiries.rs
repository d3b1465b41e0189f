//! Contact inquiry listing.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use super::{AdminView, render, short_date};
use crate::{
    error::AppError, filters, middleware::LayoutAdmin, models::Inquiry, state::AppState,
};

const EXCERPT_CHARS: usize = 80;

#[derive(Debug, Clone)]
pub struct InquiryView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub excerpt: String,
    pub status: String,
    pub unread: bool,
    pub received: String,
}

impl From<&Inquiry> for InquiryView {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            name: inquiry.name.clone(),
            email: inquiry.email.to_string(),
            phone: inquiry.phone.clone().unwrap_or_default(),
            excerpt: excerpt(&inquiry.message, EXCERPT_CHARS),
            status: inquiry.status.to_string(),
            unread: inquiry.status.is_unread(),
            received: short_date(&inquiry.created_at),
        }
    }
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis.
fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.push('…');
    cut
}

#[derive(Template)]
#[template(path = "inquiries.html")]
pub struct InquiriesTemplate {
    pub admin_user: AdminView,
    pub current_path: String,
    pub inquiries: Vec<InquiryView>,
    pub unread_count: usize,
}

/// Inquiries page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    LayoutAdmin(admin): LayoutAdmin,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let inquiries: Vec<InquiryView> = state
        .catalog()
        .list_inquiries()
        .await?
        .iter()
        .map(InquiryView::from)
        .collect();
    let unread_count = inquiries.iter().filter(|i| i.unread).count();

    Ok(render(&InquiriesTemplate {
        admin_user: AdminView::from(&admin),
        current_path: "/admin/inquiries".to_string(),
        inquiries,
        unread_count,
    }))
}
