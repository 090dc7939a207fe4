//! Supply-tax (GST) applicability checks: levy, place of supply, and which
//! party remits.

mod domain;
mod rules;

pub use domain::{
    ChargeMechanism, GstApplicability, GstLevy, GstRequest, RecipientRegistration, ServiceCategory,
    StateCode, SupplyKind, TransactionLocation,
};

use rules::{CheckedLocality, CheckedRequest};

/// Check a supply for GST applicability.
///
/// Validation runs in a fixed order (value, selections, domestic states) and
/// each failure halts with the corresponding field message. Valid requests
/// flow through the locality baseline and then the liability chain.
pub fn assess(request: &GstRequest) -> GstApplicability {
    if !request.value.is_finite() || request.value <= 0.0 {
        return GstApplicability::not_applicable("Please enter a valid positive supply value.");
    }

    let (Some(supply_kind), Some(registration), Some(location)) = (
        request.supply_kind,
        request.registration,
        request.location,
    ) else {
        return GstApplicability::not_applicable("Please select all required fields.");
    };

    let supplier_state = request.supplier_state.as_ref().filter(|s| !s.is_blank());
    let recipient_state = request.recipient_state.as_ref().filter(|s| !s.is_blank());

    let locality = match location {
        TransactionLocation::Domestic => match (supplier_state, recipient_state) {
            (Some(supplier), Some(recipient)) => CheckedLocality::Domestic {
                supplier,
                recipient,
            },
            _ => {
                return GstApplicability::not_applicable(
                    "Please select both Supplier and Recipient States for Domestic transaction.",
                )
            }
        },
        TransactionLocation::Export => CheckedLocality::Export,
        TransactionLocation::Import => CheckedLocality::Import,
    };

    let checked = CheckedRequest {
        supply_kind,
        registration,
        locality,
        service_category: request.service_category,
        supplier_is_foreign: request.supplier_is_foreign,
        recipient_is_ntor: request.recipient_is_ntor,
    };

    let baseline = rules::locality_baseline(&checked);
    rules::resolve_liability(&checked, baseline)
}
