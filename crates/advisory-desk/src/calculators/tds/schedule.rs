use super::domain::{PayerStatus, PaymentCategory};

/// Floor rate applied under Sec 206AA when no PAN is on file.
pub(crate) const NO_PAN_FLOOR_RATE: f64 = 20.0;

/// How a schedule row's threshold gates applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThresholdTrigger {
    /// Withholding starts strictly above the threshold.
    Above,
    /// Withholding starts at the threshold itself (Sec 194IA only).
    AtOrAbove,
    /// Applicable regardless of amount.
    Always,
}

/// Rate basis for a schedule row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RateBasis {
    Percent(f64),
    /// Slab-dependent; a concrete figure needs the full income picture.
    SlabBased,
    /// Set by the Act read with the applicable tax treaty (Sec 195).
    TreatyDetermined,
}

/// One row of the withholding schedule.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SectionRuling {
    pub(crate) section: &'static str,
    pub(crate) threshold: f64,
    pub(crate) rate: RateBasis,
    pub(crate) trigger: ThresholdTrigger,
    pub(crate) remarks: String,
}

impl SectionRuling {
    fn new(section: &'static str, threshold: f64, rate: RateBasis) -> Self {
        Self {
            section,
            threshold,
            rate,
            trigger: ThresholdTrigger::Above,
            remarks: String::new(),
        }
    }

    fn with_trigger(mut self, trigger: ThresholdTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }
}

/// Select the schedule row for a payment category. Payer status only matters
/// for the rows whose threshold or rate branches on it.
pub(crate) fn ruling_for(category: PaymentCategory, payer_status: PayerStatus) -> SectionRuling {
    use PaymentCategory::*;

    match category {
        Salary => SectionRuling::new("192", 0.0, RateBasis::SlabBased)
            .with_trigger(ThresholdTrigger::Always)
            .with_remarks(
                "TDS on salary depends on tax slab after considering all exemptions and \
                 deductions. Actual calculation requires detailed income and deduction \
                 information.",
            ),
        PrematureEpfWithdrawal => SectionRuling::new("192A", 50_000.0, RateBasis::Percent(10.0)),
        InterestOnSecurities => SectionRuling::new("193", 10_000.0, RateBasis::Percent(10.0)),
        Dividend => SectionRuling::new("194", 5_000.0, RateBasis::Percent(10.0)),
        OtherInterest => {
            let threshold = match payer_status {
                PayerStatus::SeniorCitizen => 50_000.0,
                _ => 40_000.0,
            };
            SectionRuling::new("194A", threshold, RateBasis::Percent(10.0)).with_remarks(format!(
                "Threshold is ₹{} for this category. Threshold varies for senior citizens \
                 and type of payer (bank vs other).",
                group_thousands(threshold as u64)
            ))
        }
        LotteryWinnings => SectionRuling::new("194B/194BA/194BB", 10_000.0, RateBasis::Percent(30.0))
            .with_remarks("Applicable for lotteries, crossword puzzles, online games, horse races."),
        ContractPayments => {
            let rate = match payer_status {
                PayerStatus::IndividualOrHuf => 1.0,
                _ => 2.0,
            };
            SectionRuling::new("194C", 30_000.0, RateBasis::Percent(rate)).with_remarks(
                "Individual/HUF rate is 1%, others 2%. Note: Higher threshold for aggregate \
                 payments (₹1,00,000) not covered by this single transaction calculator.",
            )
        }
        InsuranceCommission => SectionRuling::new("194D", 15_000.0, RateBasis::Percent(5.0))
            .with_remarks("Rate is 5% for resident. If company, rate might be 10%."),
        CommissionBrokerage => SectionRuling::new("194H", 15_000.0, RateBasis::Percent(5.0)),
        LandBuildingRent => SectionRuling::new("194I", 240_000.0, RateBasis::Percent(10.0))
            .with_remarks(ANNUAL_RENT_REMARK),
        PlantMachineryRent => SectionRuling::new("194I", 240_000.0, RateBasis::Percent(2.0))
            .with_remarks(ANNUAL_RENT_REMARK),
        ProfessionalFees => SectionRuling::new("194J", 30_000.0, RateBasis::Percent(10.0))
            .with_remarks(TECHNICAL_FEES_REMARK),
        TechnicalServiceFees => SectionRuling::new("194J", 30_000.0, RateBasis::Percent(2.0))
            .with_remarks(TECHNICAL_FEES_REMARK),
        ImmovablePropertyPurchase => {
            SectionRuling::new("194IA", 5_000_000.0, RateBasis::Percent(1.0))
                .with_trigger(ThresholdTrigger::AtOrAbove)
                .with_remarks(
                    "Applicable on transfer of immovable property (other than agricultural land).",
                )
        }
        ResidentialRent => SectionRuling::new("194IB", 50_000.0, RateBasis::Percent(5.0))
            .with_remarks(
                "Applicable for Individuals/HUF not liable for tax audit, paying rent > \
                 ₹50,000 per month. Please enter *monthly* rent amount.",
            ),
        GoodsPurchase => SectionRuling::new("194Q", 5_000_000.0, RateBasis::Percent(0.1))
            .with_remarks(
                "Applicable if turnover of buyer exceeds ₹10 Cr in preceding FY. Excludes \
                 cases where TDS is under 194O.",
            ),
        BusinessPerquisites => SectionRuling::new("194R", 20_000.0, RateBasis::Percent(10.0))
            .with_remarks("Deduction on benefit/perquisite arising from business or profession."),
        VirtualDigitalAssets => SectionRuling::new("194S", 10_000.0, RateBasis::Percent(1.0))
            .with_remarks("Threshold varies for specified persons (buyers)."),
        NonResidentPayments => SectionRuling::new("195", 0.0, RateBasis::TreatyDetermined)
            .with_trigger(ThresholdTrigger::Always)
            .with_remarks(
                "Applicability and rate depend on nature of income (e.g., interest, royalty, \
                 FTS) and Double Taxation Avoidance Agreement (DTAA). Specific details are \
                 required for calculation.",
            ),
    }
}

const ANNUAL_RENT_REMARK: &str = "This threshold is annual. If payer is Individual/HUF not \
     under tax audit, Sec 194IB applies (5% if rent > ₹50,000/month on monthly payments).";

const TECHNICAL_FEES_REMARK: &str =
    "Rate is 2% for fees for technical services, call center, film royalty.";

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping_matches_display_format() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(40_000), "40,000");
        assert_eq!(group_thousands(5_000_000), "5,000,000");
    }

    #[test]
    fn senior_citizens_get_the_higher_interest_threshold() {
        let senior = ruling_for(PaymentCategory::OtherInterest, PayerStatus::SeniorCitizen);
        let regular = ruling_for(PaymentCategory::OtherInterest, PayerStatus::IndividualOrHuf);
        assert_eq!(senior.threshold, 50_000.0);
        assert_eq!(regular.threshold, 40_000.0);
        assert!(senior.remarks.contains("₹50,000"));
        assert!(regular.remarks.contains("₹40,000"));
    }

    #[test]
    fn contract_rate_branches_on_payer_status() {
        let individual = ruling_for(
            PaymentCategory::ContractPayments,
            PayerStatus::IndividualOrHuf,
        );
        let company = ruling_for(PaymentCategory::ContractPayments, PayerStatus::OtherEntity);
        assert_eq!(individual.rate, RateBasis::Percent(1.0));
        assert_eq!(company.rate, RateBasis::Percent(2.0));
    }

    #[test]
    fn only_property_purchase_triggers_at_threshold() {
        let property = ruling_for(
            PaymentCategory::ImmovablePropertyPurchase,
            PayerStatus::OtherEntity,
        );
        assert_eq!(property.trigger, ThresholdTrigger::AtOrAbove);

        let dividend = ruling_for(PaymentCategory::Dividend, PayerStatus::OtherEntity);
        assert_eq!(dividend.trigger, ThresholdTrigger::Above);
    }
}
