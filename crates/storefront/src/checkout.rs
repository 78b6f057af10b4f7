//! Order summary and the mock checkout ("order enquiry").
//!
//! There is no payment step. Submitting an enquiry validates the shopper's
//! contact details, snapshots the cart into an [`OrderEnquiry`], and empties
//! the cart. The store team follows up by phone or email.

use chrono::{DateTime, Utc};
use elegance_core::{Email, EmailError, EnquiryId, Price, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::Notification;
use crate::session::ShopSession;
use crate::store::{CartLineItem, CartStore};

/// Subtotal at or above which shipping is free (₹999).
pub const FREE_SHIPPING_THRESHOLD: Price = Price::from_major(999);

/// Flat shipping fee below the threshold (₹99).
pub const SHIPPING_FEE: Price = Price::from_major(99);

/// Cart totals shown beside the cart and the enquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    /// How much more to spend for free shipping; zero once reached.
    pub free_shipping_remaining: Price,
}

impl OrderSummary {
    /// Summary for the current cart contents.
    #[must_use]
    pub fn for_cart(cart: &CartStore) -> Self {
        Self::for_subtotal(cart.total_price())
    }

    /// Summary for a given subtotal.
    ///
    /// A zero subtotal means nothing ships, so every field is zero.
    #[must_use]
    pub fn for_subtotal(subtotal: Price) -> Self {
        if subtotal == Price::ZERO {
            return Self {
                subtotal,
                shipping: Price::ZERO,
                total: Price::ZERO,
                free_shipping_remaining: Price::ZERO,
            };
        }
        let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            SHIPPING_FEE
        };
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
            free_shipping_remaining: FREE_SHIPPING_THRESHOLD.saturating_sub(subtotal),
        }
    }
}

/// Contact details submitted with an enquiry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub message: String,
}

/// Why an enquiry was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnquiryError {
    #[error("Please fill all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Your cart is empty")]
    EmptyCart,
}

impl EnquiryError {
    /// Short title for the notification shown to the shopper.
    #[must_use]
    pub const fn notification_title(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "Please fill all required fields",
            Self::InvalidEmail(_) => "Please enter a valid email",
            Self::EmptyCart => "Your cart is empty",
        }
    }
}

/// Validated contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A cart line frozen at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryLine {
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

impl From<&CartLineItem> for EnquiryLine {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            size: item.selected_size.clone(),
            color: item.selected_color.clone(),
            quantity: item.quantity,
            unit_price: item.product.price,
            line_total: item.line_total(),
        }
    }
}

/// A submitted order enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEnquiry {
    pub id: EnquiryId,
    pub submitted_at: DateTime<Utc>,
    pub contact: Contact,
    pub lines: Vec<EnquiryLine>,
    pub summary: OrderSummary,
}

impl EnquiryForm {
    /// Check required fields and normalize the contact details.
    ///
    /// # Errors
    ///
    /// Returns [`EnquiryError::MissingFields`] listing every blank required
    /// field, or [`EnquiryError::InvalidEmail`].
    pub fn validate(&self) -> Result<Contact, EnquiryError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(EnquiryError::MissingFields(missing));
        }

        Ok(Contact {
            name: self.name.trim().to_owned(),
            email: Email::parse(&self.email)?,
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: non_blank(&self.city),
            pincode: non_blank(&self.pincode),
            message: non_blank(&self.message),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Submit the cart as an order enquiry.
///
/// On success the cart is emptied and an "Order Submitted!" notification is
/// raised. On failure nothing changes and an error notification is raised.
///
/// # Errors
///
/// Returns an error if the form is incomplete, the email is invalid, or the
/// cart is empty.
pub fn submit_enquiry(
    session: &mut ShopSession,
    form: &EnquiryForm,
) -> Result<OrderEnquiry, EnquiryError> {
    let contact = match form.validate() {
        Ok(contact) => contact,
        Err(e) => {
            session.notify(Notification::error(e.notification_title()));
            return Err(e);
        }
    };

    if session.cart().is_empty() {
        let e = EnquiryError::EmptyCart;
        session.notify(Notification::error(e.notification_title()));
        return Err(e);
    }

    let enquiry = OrderEnquiry {
        id: EnquiryId::new_v4(),
        submitted_at: Utc::now(),
        lines: session.cart().items().iter().map(EnquiryLine::from).collect(),
        summary: OrderSummary::for_cart(session.cart()),
        contact,
    };

    session.cart_mut().clear_cart();
    session.notify(Notification::info(
        "Order Submitted!",
        "We'll contact you shortly to confirm your order.",
    ));
    tracing::info!(
        enquiry_id = %enquiry.id,
        lines = enquiry.lines.len(),
        total = %enquiry.summary.total,
        "Order enquiry submitted"
    );

    Ok(enquiry)
}
