//! Wire representations for the Razorpay orders API.
//!
//! Field names match the gateway's JSON contract; conversion into domain
//! types happens at the adapter boundary.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{GatewayOrder, OrderRequest};

/// Body of `POST /v1/orders`.
#[derive(Debug, Serialize)]
pub(super) struct OrderRequestDto<'a> {
    /// Amount in minor currency units (paise for INR).
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: &'a str,
    pub notes: OrderNotesDto<'a>,
}

/// Reconciliation metadata echoed back in gateway dashboards.
#[derive(Debug, Serialize)]
pub(super) struct OrderNotesDto<'a> {
    pub course_id: &'a str,
    pub user_id: &'a str,
    pub course_title: &'a str,
}

impl<'a> OrderRequestDto<'a> {
    pub fn from_domain(request: &'a OrderRequest) -> Self {
        Self {
            amount: request.amount_minor,
            currency: &request.currency,
            receipt: &request.receipt,
            notes: OrderNotesDto {
                course_id: &request.notes.course_id,
                user_id: &request.notes.user_id,
                course_title: &request.notes.course_title,
            },
        }
    }
}

/// Order descriptor returned by the gateway.
#[derive(Debug, Deserialize)]
pub(super) struct OrderResponseDto {
    pub id: String,
    pub amount: i64,
    pub currency: String,
}

impl OrderResponseDto {
    pub fn into_domain_order(self) -> GatewayOrder {
        GatewayOrder {
            id: self.id,
            amount_minor: self.amount,
            currency: self.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::OrderNotes;

    #[test]
    fn request_serialises_with_gateway_field_names() {
        let request = OrderRequest {
            amount_minor: 49_950,
            currency: "INR".to_owned(),
            receipt: "course_aaaaaaaa_bbbbbbbb".to_owned(),
            notes: OrderNotes {
                course_id: "c-1".to_owned(),
                user_id: "u-1".to_owned(),
                course_title: "Rust Basics".to_owned(),
            },
        };

        let json =
            serde_json::to_value(OrderRequestDto::from_domain(&request)).expect("serialises");
        assert_eq!(json["amount"], 49_950);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["receipt"], "course_aaaaaaaa_bbbbbbbb");
        assert_eq!(json["notes"]["course_title"], "Rust Basics");
    }

    #[test]
    fn response_decodes_and_ignores_extra_fields() {
        let body = r#"{
            "id": "order_Nxyz123",
            "entity": "order",
            "amount": 49950,
            "amount_paid": 0,
            "currency": "INR",
            "status": "created"
        }"#;

        let decoded: OrderResponseDto = serde_json::from_str(body).expect("decodes");
        let order = decoded.into_domain_order();
        assert_eq!(order.id, "order_Nxyz123");
        assert_eq!(order.amount_minor, 49_950);
        assert_eq!(order.currency, "INR");
    }
}
