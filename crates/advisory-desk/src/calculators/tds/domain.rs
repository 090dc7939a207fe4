use serde::{Deserialize, Serialize};

/// Payment categories covered by the withholding schedule.
///
/// The client portal's "Others (General)" option carries no schedule row and
/// is represented by leaving [`TdsRequest::category`] unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCategory {
    Salary,
    PrematureEpfWithdrawal,
    InterestOnSecurities,
    Dividend,
    OtherInterest,
    LotteryWinnings,
    ContractPayments,
    InsuranceCommission,
    CommissionBrokerage,
    LandBuildingRent,
    PlantMachineryRent,
    ProfessionalFees,
    TechnicalServiceFees,
    ImmovablePropertyPurchase,
    ResidentialRent,
    GoodsPurchase,
    BusinessPerquisites,
    VirtualDigitalAssets,
    NonResidentPayments,
}

/// Payer/payee standing, consulted only by the schedule rows that branch on it
/// (contract payments, interest other than securities, non-resident payments).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayerStatus {
    IndividualOrHuf,
    #[default]
    OtherEntity,
    SeniorCitizen,
    NonResident,
}

/// One withholding check as submitted from the portal or CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdsRequest {
    pub category: Option<PaymentCategory>,
    pub amount: f64,
    pub pan_on_file: bool,
    #[serde(default)]
    pub payer_status: PayerStatus,
}

/// Outcome of a withholding check. Validation failures and unmatched
/// categories surface here as non-applicable assessments, never as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdsAssessment {
    pub applicable: bool,
    pub section: String,
    pub rate_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub message: String,
    pub remarks: String,
}

impl TdsAssessment {
    pub(crate) fn not_applicable(message: impl Into<String>, remarks: impl Into<String>) -> Self {
        Self {
            applicable: false,
            section: "N/A".to_string(),
            rate_display: "N/A".to_string(),
            amount: None,
            message: message.into(),
            remarks: remarks.into(),
        }
    }
}
