//! Order enquiry (mock checkout) route handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::instrument;

use super::{ActionResponse, JsonBody};
use super::cart::CartView;
use crate::checkout::{EnquiryForm, submit_enquiry};
use crate::error::{AppError, ErrorBody, add_breadcrumb};
use crate::state::AppState;

/// What the enquiry page shows before submission.
#[derive(Debug, Serialize)]
pub struct EnquiryPage {
    pub cart: CartView,
    pub can_submit: bool,
}

/// Show the cart summary for the enquiry form.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<EnquiryPage> {
    let session = state.session().await;
    Json(EnquiryPage {
        can_submit: !session.cart().is_empty(),
        cart: CartView::from(session.cart()),
    })
}

/// Submit the cart as an order enquiry.
///
/// Returns 201 with the enquiry snapshot. A rejection keeps the usual error
/// status and also carries the notification the session raised.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<EnquiryForm>,
) -> Response {
    let mut session = state.session().await;
    let result = submit_enquiry(&mut session, &form);
    let notifications = state.take_notifications();
    drop(session);

    match result {
        Ok(enquiry) => {
            let enquiry_id = enquiry.id.to_string();
            add_breadcrumb(
                "checkout",
                "Order enquiry submitted",
                &[("enquiry_id", enquiry_id.as_str())],
            );
            (
                StatusCode::CREATED,
                Json(ActionResponse::new(enquiry, notifications)),
            )
                .into_response()
        }
        Err(e) => {
            let error = AppError::from(e);
            tracing::info!(error = %error, "Order enquiry rejected");
            (
                error.status(),
                Json(ActionResponse::new(
                    ErrorBody {
                        error: error.to_string(),
                    },
                    notifications,
                )),
            )
                .into_response()
        }
    }
}
