//! Withholding (TDS) assessment under the Income Tax Act, 1961.
//!
//! The schedule in [`schedule`] is a transcription of the section-wise
//! thresholds and rates the firm publishes on its portal; [`assess`] applies
//! it as a pure function of the submitted request.

mod domain;
mod schedule;

pub use domain::{PayerStatus, PaymentCategory, TdsAssessment, TdsRequest};

use crate::calculators::append_remark;
use schedule::{RateBasis, ThresholdTrigger, NO_PAN_FLOOR_RATE};

/// Assess a single payment for withholding.
///
/// Every input maps to an assessment: invalid amounts and unmatched
/// categories come back as non-applicable results with an explanatory
/// message rather than an error.
pub fn assess(request: &TdsRequest) -> TdsAssessment {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return TdsAssessment::not_applicable("Please enter a valid positive amount.", "");
    }

    let Some(category) = request.category else {
        return TdsAssessment::not_applicable(
            "TDS is not applicable for this payment.",
            "Select a specific payment nature for detailed calculation.",
        );
    };

    let ruling = schedule::ruling_for(category, request.payer_status);

    let applicable = match ruling.trigger {
        ThresholdTrigger::Above => request.amount > ruling.threshold,
        ThresholdTrigger::AtOrAbove => request.amount >= ruling.threshold,
        ThresholdTrigger::Always => true,
    };

    let mut remarks = ruling.remarks;

    let (rate_display, amount) = match ruling.rate {
        RateBasis::Percent(base) => {
            if !applicable {
                ("N/A".to_string(), None)
            } else if request.pan_on_file {
                (
                    format!("{}%", percent(base)),
                    Some(round_currency(request.amount * base / 100.0)),
                )
            } else {
                // Sec 206AA: rate floors at 20% when no PAN is on file.
                let effective = base.max(NO_PAN_FLOOR_RATE);
                append_remark(
                    &mut remarks,
                    &format!(
                        "PAN not available: TDS @ {}% (or 20% if higher as per Sec 206AA).",
                        percent(effective)
                    ),
                );
                (
                    format!(
                        "{}% (increased to {}% due to Sec 206AA)",
                        percent(base),
                        percent(effective)
                    ),
                    Some(round_currency(request.amount * effective / 100.0)),
                )
            }
        }
        // Slab-based and treaty-determined rows never take the Sec 206AA
        // adjustment; salary without PAN carries its own flat rate.
        RateBasis::SlabBased => {
            if request.pan_on_file {
                ("As per individual tax slab".to_string(), None)
            } else {
                (
                    "20% (Max Marginal Rate)".to_string(),
                    Some(round_currency(request.amount * NO_PAN_FLOOR_RATE / 100.0)),
                )
            }
        }
        RateBasis::TreatyDetermined => ("As per Act / DTAA".to_string(), None),
    };

    let message = if applicable {
        "TDS is applicable for this payment.".to_string()
    } else {
        "TDS is not applicable for this payment.".to_string()
    };

    if remarks.is_empty() {
        remarks = "Standard rules apply.".to_string();
    }

    TdsAssessment {
        applicable,
        section: ruling.section.to_string(),
        rate_display,
        amount: if applicable { amount } else { None },
        message,
        remarks,
    }
}

fn percent(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.0}")
    } else {
        format!("{rate}")
    }
}

fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
