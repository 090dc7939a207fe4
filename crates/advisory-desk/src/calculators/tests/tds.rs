use super::common::{assert_close, tds_request};
use crate::calculators::tds::{self, PayerStatus, PaymentCategory, TdsRequest};

#[test]
fn rejects_non_positive_amounts() {
    for amount in [0.0, -500.0, f64::NAN, f64::INFINITY] {
        let assessment = tds::assess(&tds_request(Some(PaymentCategory::Dividend), amount, true));
        assert!(!assessment.applicable);
        assert_eq!(assessment.message, "Please enter a valid positive amount.");
        assert!(assessment.amount.is_none());
    }
}

#[test]
fn unselected_category_gets_default_guidance() {
    let assessment = tds::assess(&tds_request(None, 10_000.0, true));
    assert!(!assessment.applicable);
    assert_eq!(assessment.section, "N/A");
    assert_eq!(
        assessment.remarks,
        "Select a specific payment nature for detailed calculation."
    );
    assert!(assessment.amount.is_none());
}

#[test]
fn dividend_at_threshold_is_not_withheld() {
    let assessment = tds::assess(&tds_request(Some(PaymentCategory::Dividend), 5_000.0, true));
    assert!(!assessment.applicable);
    assert_eq!(assessment.section, "194");
    assert!(assessment.amount.is_none());
    assert_eq!(assessment.message, "TDS is not applicable for this payment.");
}

#[test]
fn dividend_above_threshold_with_pan_uses_base_rate() {
    let assessment = tds::assess(&tds_request(Some(PaymentCategory::Dividend), 5_001.0, true));
    assert!(assessment.applicable);
    assert_eq!(assessment.rate_display, "10%");
    assert_close(assessment.amount.expect("amount computed"), 500.10);
}

#[test]
fn dividend_without_pan_is_floored_at_twenty_percent() {
    let assessment = tds::assess(&tds_request(Some(PaymentCategory::Dividend), 5_001.0, false));
    assert!(assessment.applicable);
    assert_eq!(
        assessment.rate_display,
        "10% (increased to 20% due to Sec 206AA)"
    );
    assert_close(assessment.amount.expect("amount computed"), 1_000.20);
    assert!(assessment
        .remarks
        .contains("PAN not available: TDS @ 20% (or 20% if higher as per Sec 206AA)."));
}

#[test]
fn missing_pan_does_not_apply_below_threshold() {
    let assessment = tds::assess(&tds_request(Some(PaymentCategory::Dividend), 4_000.0, false));
    assert!(!assessment.applicable);
    assert!(assessment.amount.is_none());
    assert_eq!(assessment.rate_display, "N/A");
}

#[test]
fn property_purchase_triggers_at_the_threshold_itself() {
    let at_threshold = tds::assess(&tds_request(
        Some(PaymentCategory::ImmovablePropertyPurchase),
        5_000_000.0,
        true,
    ));
    assert!(at_threshold.applicable);
    assert_eq!(at_threshold.section, "194IA");
    assert_close(at_threshold.amount.expect("amount computed"), 50_000.0);

    let below = tds::assess(&tds_request(
        Some(PaymentCategory::ImmovablePropertyPurchase),
        4_999_999.0,
        true,
    ));
    assert!(!below.applicable);
}

#[test]
fn salary_is_always_applicable_and_slab_based_with_pan() {
    let assessment = tds::assess(&tds_request(Some(PaymentCategory::Salary), 1_200.0, true));
    assert!(assessment.applicable);
    assert_eq!(assessment.section, "192");
    assert_eq!(assessment.rate_display, "As per individual tax slab");
    assert!(assessment.amount.is_none());
}

#[test]
fn salary_without_pan_uses_its_own_flat_rate() {
    let assessment = tds::assess(&tds_request(Some(PaymentCategory::Salary), 80_000.0, false));
    assert!(assessment.applicable);
    assert_eq!(assessment.rate_display, "20% (Max Marginal Rate)");
    assert_close(assessment.amount.expect("amount computed"), 16_000.0);
    // The salary row never routes through the Sec 206AA adjustment.
    assert!(!assessment.remarks.contains("Sec 206AA"));
}

#[test]
fn non_resident_payments_are_treaty_determined_even_without_pan() {
    let assessment = tds::assess(&tds_request(
        Some(PaymentCategory::NonResidentPayments),
        250.0,
        false,
    ));
    assert!(assessment.applicable);
    assert_eq!(assessment.section, "195");
    assert_eq!(assessment.rate_display, "As per Act / DTAA");
    assert!(assessment.amount.is_none());
    assert!(!assessment.remarks.contains("Sec 206AA"));
}

#[test]
fn interest_threshold_depends_on_senior_citizen_status() {
    let senior = tds::assess(&TdsRequest {
        category: Some(PaymentCategory::OtherInterest),
        amount: 45_000.0,
        pan_on_file: true,
        payer_status: PayerStatus::SeniorCitizen,
    });
    assert!(!senior.applicable);

    let regular = tds::assess(&TdsRequest {
        category: Some(PaymentCategory::OtherInterest),
        amount: 45_000.0,
        pan_on_file: true,
        payer_status: PayerStatus::IndividualOrHuf,
    });
    assert!(regular.applicable);
    assert_close(regular.amount.expect("amount computed"), 4_500.0);
}

#[test]
fn contract_payments_rate_depends_on_payer_status() {
    let individual = tds::assess(&TdsRequest {
        category: Some(PaymentCategory::ContractPayments),
        amount: 50_000.0,
        pan_on_file: true,
        payer_status: PayerStatus::IndividualOrHuf,
    });
    assert_eq!(individual.rate_display, "1%");
    assert_close(individual.amount.expect("amount computed"), 500.0);

    let company = tds::assess(&TdsRequest {
        category: Some(PaymentCategory::ContractPayments),
        amount: 50_000.0,
        pan_on_file: true,
        payer_status: PayerStatus::OtherEntity,
    });
    assert_eq!(company.rate_display, "2%");
    assert_close(company.amount.expect("amount computed"), 1_000.0);
}

#[test]
fn fractional_rates_render_without_padding() {
    let assessment = tds::assess(&tds_request(
        Some(PaymentCategory::GoodsPurchase),
        6_000_000.0,
        true,
    ));
    assert!(assessment.applicable);
    assert_eq!(assessment.rate_display, "0.1%");
    assert_close(assessment.amount.expect("amount computed"), 6_000.0);
}

#[test]
fn fractional_rate_elevation_shows_both_rates() {
    let assessment = tds::assess(&tds_request(
        Some(PaymentCategory::GoodsPurchase),
        6_000_000.0,
        false,
    ));
    assert_eq!(
        assessment.rate_display,
        "0.1% (increased to 20% due to Sec 206AA)"
    );
    assert_close(assessment.amount.expect("amount computed"), 1_200_000.0);
}

#[test]
fn assessments_are_idempotent() {
    let request = tds_request(Some(PaymentCategory::ProfessionalFees), 45_000.0, false);
    assert_eq!(tds::assess(&request), tds::assess(&request));
}

#[test]
fn remarks_fall_back_to_standard_rules() {
    let assessment = tds::assess(&tds_request(
        Some(PaymentCategory::CommissionBrokerage),
        20_000.0,
        true,
    ));
    assert!(assessment.applicable);
    assert_eq!(assessment.remarks, "Standard rules apply.");
}
