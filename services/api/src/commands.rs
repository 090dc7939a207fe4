use std::path::PathBuf;
use std::sync::Arc;

use advisory_desk::calculators::gst::{
    self, GstRequest, RecipientRegistration, ServiceCategory, StateCode, SupplyKind,
    TransactionLocation,
};
use advisory_desk::calculators::itc::{self, ExpenseCategory, ItcRequest, UsagePurpose};
use advisory_desk::calculators::tds::{self, PayerStatus, PaymentCategory, TdsRequest};
use advisory_desk::content::{InMemoryNoticeStore, NoticeCsvImporter, NoticeFeedService};
use advisory_desk::error::AppError;
use clap::{Args, ValueEnum};

#[derive(Args, Debug)]
pub(crate) struct TdsArgs {
    /// Nature of the payment; omit for the general guidance result
    #[arg(long, value_enum)]
    category: Option<TdsCategoryArg>,
    /// Payment amount in rupees
    #[arg(long)]
    amount: f64,
    /// Assess as if the payee's PAN is not on file
    #[arg(long)]
    no_pan: bool,
    /// Payer/payee status for the sections that branch on it
    #[arg(long, value_enum, default_value = "other-entity")]
    payer_status: PayerStatusArg,
}

#[derive(Args, Debug)]
pub(crate) struct GstArgs {
    /// Goods or services
    #[arg(long, value_enum)]
    supply: SupplyKindArg,
    /// Domestic, export, or import
    #[arg(long, value_enum)]
    location: LocationArg,
    /// Supplier's state code, required for domestic supplies
    #[arg(long)]
    supplier_state: Option<String>,
    /// Recipient's state code, required for domestic supplies
    #[arg(long)]
    recipient_state: Option<String>,
    /// Recipient's registration status
    #[arg(long, value_enum)]
    registration: RegistrationArg,
    /// Specific service nature, when the supply is of services
    #[arg(long, value_enum)]
    service: Option<ServiceCategoryArg>,
    /// Supplier is located in a foreign or non-taxable territory
    #[arg(long)]
    foreign_supplier: bool,
    /// Recipient is a Non-Taxable Online Recipient (NTOR)
    #[arg(long)]
    ntor_recipient: bool,
    /// Supply value in rupees
    #[arg(long)]
    value: f64,
}

#[derive(Args, Debug)]
pub(crate) struct ItcArgs {
    /// Nature of the inward goods/services
    #[arg(long, value_enum)]
    category: ItcCategoryArg,
    /// What the inward supply is used for
    #[arg(long, value_enum)]
    purpose: PurposeArg,
    /// Recipient is a composition scheme taxpayer
    #[arg(long)]
    composition: bool,
}

#[derive(Args, Debug)]
pub(crate) struct NoticesArgs {
    /// CSV export of the hosted notices table
    #[arg(long)]
    csv: PathBuf,
    /// Print at most this many notices
    #[arg(long)]
    limit: Option<usize>,
}

pub(crate) fn run_tds(args: TdsArgs) {
    let request = TdsRequest {
        category: args.category.map(PaymentCategory::from),
        amount: args.amount,
        pan_on_file: !args.no_pan,
        payer_status: args.payer_status.into(),
    };
    let assessment = tds::assess(&request);

    println!("TDS assessment");
    println!(
        "Status: {}",
        if assessment.applicable {
            "Applicable"
        } else {
            "Not Applicable"
        }
    );
    println!("Section: {}", assessment.section);
    println!("Rate: {}", assessment.rate_display);
    if let Some(amount) = assessment.amount {
        println!("Estimated TDS amount: ₹{amount:.2}");
    }
    println!("Message: {}", assessment.message);
    println!("Remarks: {}", assessment.remarks);
}

pub(crate) fn run_gst(args: GstArgs) {
    let request = GstRequest {
        supply_kind: Some(args.supply.into()),
        location: Some(args.location.into()),
        supplier_state: args.supplier_state.map(StateCode::new),
        recipient_state: args.recipient_state.map(StateCode::new),
        registration: Some(args.registration.into()),
        service_category: args.service.map(ServiceCategory::from),
        supplier_is_foreign: args.foreign_supplier,
        recipient_is_ntor: args.ntor_recipient,
        value: args.value,
    };
    let assessment = gst::assess(&request);

    println!("GST applicability");
    if assessment.applicable {
        println!("Status: Applicable");
    } else {
        println!("Status: Not Applicable");
    }
    println!("Message: {}", assessment.message);
    if let Some(place) = &assessment.place_of_supply {
        println!("Place of supply: {place}");
    }
    if let Some(charge) = assessment.charge {
        println!("Charge mechanism: {}", charge.label());
    }
    if let Some(levy) = assessment.levy {
        println!("Type of GST: {}", levy.label());
    }
    if assessment.remarks.is_empty() {
        println!("Remarks: Standard applicability applies.");
    } else {
        println!("Remarks: {}", assessment.remarks);
    }
}

pub(crate) fn run_itc(args: ItcArgs) {
    let request = ItcRequest {
        category: Some(args.category.into()),
        purpose: Some(args.purpose.into()),
        composition_taxpayer: args.composition,
    };
    let assessment = itc::assess(&request);

    println!("ITC availment");
    println!(
        "Status: {}",
        if assessment.eligible {
            "Eligible"
        } else {
            "Not Eligible"
        }
    );
    println!("Message: {}", assessment.message);
    if !assessment.conditions.is_empty() {
        println!("Conditions to be fulfilled:");
        for condition in &assessment.conditions {
            println!("- {condition}");
        }
    }
}

pub(crate) fn run_notices(args: NoticesArgs) -> Result<(), AppError> {
    let notices = NoticeCsvImporter::from_path(&args.csv)?;
    let store = Arc::new(InMemoryNoticeStore::seeded(notices));
    let service = NoticeFeedService::new(store);

    let feed = match service.latest() {
        Ok(feed) => feed,
        // The in-memory store cannot fail, but the service contract can.
        Err(error) => {
            eprintln!("unable to assemble notice feed: {error}");
            return Ok(());
        }
    };

    if feed.is_empty() {
        println!("No legal updates available at the moment.");
        return Ok(());
    }

    println!("Latest legal updates");
    let limit = args.limit.unwrap_or(feed.len());
    for notice in feed.iter().take(limit) {
        println!("\n{} ({})", notice.title, notice.published_on);
        println!("{}", notice.summary);
        if let Some(link) = &notice.source_link {
            println!("Read more: {link}");
        }
    }

    Ok(())
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum TdsCategoryArg {
    Salary,
    EpfWithdrawal,
    SecuritiesInterest,
    Dividend,
    OtherInterest,
    Lottery,
    Contract,
    InsuranceCommission,
    Brokerage,
    LandBuildingRent,
    PlantMachineryRent,
    ProfessionalFees,
    TechnicalFees,
    PropertyPurchase,
    ResidentialRent,
    GoodsPurchase,
    Perquisites,
    VirtualDigitalAssets,
    NonResident,
}

impl From<TdsCategoryArg> for PaymentCategory {
    fn from(value: TdsCategoryArg) -> Self {
        match value {
            TdsCategoryArg::Salary => PaymentCategory::Salary,
            TdsCategoryArg::EpfWithdrawal => PaymentCategory::PrematureEpfWithdrawal,
            TdsCategoryArg::SecuritiesInterest => PaymentCategory::InterestOnSecurities,
            TdsCategoryArg::Dividend => PaymentCategory::Dividend,
            TdsCategoryArg::OtherInterest => PaymentCategory::OtherInterest,
            TdsCategoryArg::Lottery => PaymentCategory::LotteryWinnings,
            TdsCategoryArg::Contract => PaymentCategory::ContractPayments,
            TdsCategoryArg::InsuranceCommission => PaymentCategory::InsuranceCommission,
            TdsCategoryArg::Brokerage => PaymentCategory::CommissionBrokerage,
            TdsCategoryArg::LandBuildingRent => PaymentCategory::LandBuildingRent,
            TdsCategoryArg::PlantMachineryRent => PaymentCategory::PlantMachineryRent,
            TdsCategoryArg::ProfessionalFees => PaymentCategory::ProfessionalFees,
            TdsCategoryArg::TechnicalFees => PaymentCategory::TechnicalServiceFees,
            TdsCategoryArg::PropertyPurchase => PaymentCategory::ImmovablePropertyPurchase,
            TdsCategoryArg::ResidentialRent => PaymentCategory::ResidentialRent,
            TdsCategoryArg::GoodsPurchase => PaymentCategory::GoodsPurchase,
            TdsCategoryArg::Perquisites => PaymentCategory::BusinessPerquisites,
            TdsCategoryArg::VirtualDigitalAssets => PaymentCategory::VirtualDigitalAssets,
            TdsCategoryArg::NonResident => PaymentCategory::NonResidentPayments,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum PayerStatusArg {
    IndividualOrHuf,
    OtherEntity,
    SeniorCitizen,
    NonResident,
}

impl From<PayerStatusArg> for PayerStatus {
    fn from(value: PayerStatusArg) -> Self {
        match value {
            PayerStatusArg::IndividualOrHuf => PayerStatus::IndividualOrHuf,
            PayerStatusArg::OtherEntity => PayerStatus::OtherEntity,
            PayerStatusArg::SeniorCitizen => PayerStatus::SeniorCitizen,
            PayerStatusArg::NonResident => PayerStatus::NonResident,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum SupplyKindArg {
    Goods,
    Services,
}

impl From<SupplyKindArg> for SupplyKind {
    fn from(value: SupplyKindArg) -> Self {
        match value {
            SupplyKindArg::Goods => SupplyKind::Goods,
            SupplyKindArg::Services => SupplyKind::Services,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum LocationArg {
    Domestic,
    Export,
    Import,
}

impl From<LocationArg> for TransactionLocation {
    fn from(value: LocationArg) -> Self {
        match value {
            LocationArg::Domestic => TransactionLocation::Domestic,
            LocationArg::Export => TransactionLocation::Export,
            LocationArg::Import => TransactionLocation::Import,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum RegistrationArg {
    Registered,
    Unregistered,
}

impl From<RegistrationArg> for RecipientRegistration {
    fn from(value: RegistrationArg) -> Self {
        match value {
            RegistrationArg::Registered => RecipientRegistration::Registered,
            RegistrationArg::Unregistered => RecipientRegistration::Unregistered,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum ServiceCategoryArg {
    Oidar,
    ImmovableProperty,
    Legal,
    GoodsTransport,
    Security,
    Director,
    Sponsorship,
    InsuranceAgent,
    RecoveryAgent,
    MotorVehicleRental,
    Other,
}

impl From<ServiceCategoryArg> for ServiceCategory {
    fn from(value: ServiceCategoryArg) -> Self {
        match value {
            ServiceCategoryArg::Oidar => ServiceCategory::Oidar,
            ServiceCategoryArg::ImmovableProperty => ServiceCategory::ImmovablePropertyRelated,
            ServiceCategoryArg::Legal => ServiceCategory::LegalServices,
            ServiceCategoryArg::GoodsTransport => ServiceCategory::GoodsTransportAgency,
            ServiceCategoryArg::Security => ServiceCategory::SecurityServices,
            ServiceCategoryArg::Director => ServiceCategory::DirectorServices,
            ServiceCategoryArg::Sponsorship => ServiceCategory::SponsorshipServices,
            ServiceCategoryArg::InsuranceAgent => ServiceCategory::InsuranceAgentServices,
            ServiceCategoryArg::RecoveryAgent => ServiceCategory::RecoveryAgentServices,
            ServiceCategoryArg::MotorVehicleRental => ServiceCategory::MotorVehicleRental,
            ServiceCategoryArg::Other => ServiceCategory::OtherServices,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum ItcCategoryArg {
    RawMaterials,
    CapitalGoods,
    OfficeSupplies,
    ProfessionalFees,
    PassengerVehicles,
    FoodCatering,
    WorksContract,
    ClubMembership,
    TravelBenefits,
    Other,
}

impl From<ItcCategoryArg> for ExpenseCategory {
    fn from(value: ItcCategoryArg) -> Self {
        match value {
            ItcCategoryArg::RawMaterials => ExpenseCategory::RawMaterials,
            ItcCategoryArg::CapitalGoods => ExpenseCategory::CapitalGoods,
            ItcCategoryArg::OfficeSupplies => ExpenseCategory::OfficeSupplies,
            ItcCategoryArg::ProfessionalFees => ExpenseCategory::ProfessionalFees,
            ItcCategoryArg::PassengerVehicles => ExpenseCategory::PassengerVehicles,
            ItcCategoryArg::FoodCatering => ExpenseCategory::FoodAndCatering,
            ItcCategoryArg::WorksContract => ExpenseCategory::ImmovableWorksContract,
            ItcCategoryArg::ClubMembership => ExpenseCategory::ClubMembership,
            ItcCategoryArg::TravelBenefits => ExpenseCategory::LeaveTravelBenefits,
            ItcCategoryArg::Other => ExpenseCategory::OtherBusinessExpense,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum PurposeArg {
    Business,
    Personal,
    ExemptSupplies,
}

impl From<PurposeArg> for UsagePurpose {
    fn from(value: PurposeArg) -> Self {
        match value {
            PurposeArg::Business => UsagePurpose::Business,
            PurposeArg::Personal => UsagePurpose::Personal,
            PurposeArg::ExemptSupplies => UsagePurpose::ExemptSupplies,
        }
    }
}
