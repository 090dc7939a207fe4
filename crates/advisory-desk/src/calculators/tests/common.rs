use crate::calculators::gst::{
    GstRequest, RecipientRegistration, ServiceCategory, StateCode, SupplyKind, TransactionLocation,
};
use crate::calculators::itc::{ExpenseCategory, ItcRequest, UsagePurpose};
use crate::calculators::tds::{PayerStatus, PaymentCategory, TdsRequest};

pub(super) fn tds_request(
    category: Option<PaymentCategory>,
    amount: f64,
    pan_on_file: bool,
) -> TdsRequest {
    TdsRequest {
        category,
        amount,
        pan_on_file,
        payer_status: PayerStatus::OtherEntity,
    }
}

pub(super) fn gst_request(
    supply_kind: SupplyKind,
    location: TransactionLocation,
    value: f64,
) -> GstRequest {
    GstRequest {
        supply_kind: Some(supply_kind),
        location: Some(location),
        supplier_state: None,
        recipient_state: None,
        registration: Some(RecipientRegistration::Registered),
        service_category: None,
        supplier_is_foreign: false,
        recipient_is_ntor: false,
        value,
    }
}

pub(super) fn domestic_services(
    supplier: &str,
    recipient: &str,
    registration: RecipientRegistration,
    service_category: Option<ServiceCategory>,
    value: f64,
) -> GstRequest {
    GstRequest {
        supply_kind: Some(SupplyKind::Services),
        location: Some(TransactionLocation::Domestic),
        supplier_state: Some(StateCode::new(supplier)),
        recipient_state: Some(StateCode::new(recipient)),
        registration: Some(registration),
        service_category,
        supplier_is_foreign: false,
        recipient_is_ntor: false,
        value,
    }
}

pub(super) fn itc_request(
    category: Option<ExpenseCategory>,
    purpose: Option<UsagePurpose>,
    composition_taxpayer: bool,
) -> ItcRequest {
    ItcRequest {
        category,
        purpose,
        composition_taxpayer,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
