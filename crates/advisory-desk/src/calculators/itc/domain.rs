use serde::{Deserialize, Serialize};

/// Expense categories the credit rules distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    RawMaterials,
    CapitalGoods,
    OfficeSupplies,
    ProfessionalFees,
    PassengerVehicles,
    FoodAndCatering,
    ImmovableWorksContract,
    ClubMembership,
    LeaveTravelBenefits,
    OtherBusinessExpense,
}

/// What the inward supply is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsagePurpose {
    Business,
    Personal,
    ExemptSupplies,
}

/// One eligibility check as submitted from the portal or CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItcRequest {
    pub category: Option<ExpenseCategory>,
    pub purpose: Option<UsagePurpose>,
    #[serde(default)]
    pub composition_taxpayer: bool,
}

/// Outcome of an eligibility check. The prerequisite checklist accumulates
/// before any blocking rule fires and is returned even when ineligible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItcEligibility {
    pub eligible: bool,
    pub message: String,
    pub conditions: Vec<String>,
}
