//! Input-credit (ITC) eligibility under Section 16, with the Section 17(5)
//! blocked-credit rules.

mod domain;

pub use domain::{ExpenseCategory, ItcEligibility, ItcRequest, UsagePurpose};

/// Prerequisites that apply to every availment, checked regardless of the
/// eventual eligibility outcome.
const GENERAL_CONDITIONS: [&str; 4] = [
    "Possession of tax invoice/debit note.",
    "Receipt of goods/services.",
    "Tax charged is paid by supplier to Government.",
    "Recipient has filed GSTR-3B.",
];

/// Outcome of a single blocked-credit rule.
struct BlockedCredit {
    message: &'static str,
    exceptions_note: Option<&'static str>,
}

/// Section 17(5) chain, evaluated in this fixed order; the first match wins
/// and no later rule can amend the message it set.
fn first_blocking_rule(
    category: ExpenseCategory,
    purpose: UsagePurpose,
) -> Option<BlockedCredit> {
    if purpose == UsagePurpose::Personal {
        return Some(BlockedCredit {
            message: "ITC is blocked for goods/services used for personal consumption as per \
                      Section 17(5).",
            exceptions_note: None,
        });
    }

    if purpose == UsagePurpose::ExemptSupplies {
        return Some(BlockedCredit {
            message: "ITC is not available for goods/services used exclusively for making \
                      exempt supplies.",
            exceptions_note: None,
        });
    }

    match category {
        ExpenseCategory::PassengerVehicles => Some(BlockedCredit {
            message: "ITC on motor vehicles for transport of persons (up to 13 Seats) is \
                      generally blocked, with exceptions.",
            exceptions_note: Some(
                "Exceptions: Further supply of such vehicles, transport of passengers, \
                 imparting training on driving/flying/navigating, etc.",
            ),
        }),
        ExpenseCategory::FoodAndCatering => Some(BlockedCredit {
            message: "ITC on food, beverages, outdoor catering, beauty treatment, health \
                      services, cosmetic & plastic surgery is generally blocked, with \
                      exceptions.",
            exceptions_note: Some(
                "Exceptions: Where category of outward supply is same or where input is \
                 mandatory under law.",
            ),
        }),
        ExpenseCategory::ImmovableWorksContract => Some(BlockedCredit {
            message: "ITC on works contract services for construction of immovable property \
                      (other than plant & machinery) is blocked.",
            exceptions_note: None,
        }),
        ExpenseCategory::ClubMembership => Some(BlockedCredit {
            message: "ITC on membership of a club, health and fitness centre is blocked.",
            exceptions_note: None,
        }),
        ExpenseCategory::LeaveTravelBenefits => Some(BlockedCredit {
            message: "ITC on travel benefits to employees on leave (LTC/Home Travel \
                      Concession) is blocked.",
            exceptions_note: None,
        }),
        _ => None,
    }
}

/// Check an inward supply for credit eligibility.
pub fn assess(request: &ItcRequest) -> ItcEligibility {
    let (Some(category), Some(purpose)) = (request.category, request.purpose) else {
        return ItcEligibility {
            eligible: false,
            message: "Please select supply category and purpose of use.".to_string(),
            conditions: Vec::new(),
        };
    };

    let mut conditions: Vec<String> = GENERAL_CONDITIONS
        .iter()
        .map(|condition| condition.to_string())
        .collect();

    let mut eligible = true;
    let mut message = "Input Tax Credit is generally eligible subject to fulfillment of \
                       conditions."
        .to_string();

    if let Some(blocked) = first_blocking_rule(category, purpose) {
        eligible = false;
        message = blocked.message.to_string();
        if let Some(note) = blocked.exceptions_note {
            conditions.push(note.to_string());
        }
    }

    // The composition-scheme bar is applied after the blocking chain and
    // always takes final precedence.
    if request.composition_taxpayer {
        eligible = false;
        message = "ITC is not available as the recipient is a composition scheme taxpayer."
            .to_string();
    }

    ItcEligibility {
        eligible,
        message,
        conditions,
    }
}
