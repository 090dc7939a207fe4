use serde::{Deserialize, Serialize};

/// Whether the supply is of goods or of services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyKind {
    Goods,
    Services,
}

/// Where the transaction takes place relative to the taxing territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionLocation {
    Domestic,
    Export,
    Import,
}

/// Recipient's registration standing under the GST Act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientRegistration {
    Registered,
    Unregistered,
}

/// Sub-national region code ("RJ", "MH", ...) used for locality matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(String);

impl StateCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Notified service natures that alter place of supply or shift liability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Oidar,
    ImmovablePropertyRelated,
    LegalServices,
    GoodsTransportAgency,
    SecurityServices,
    DirectorServices,
    SponsorshipServices,
    InsuranceAgentServices,
    RecoveryAgentServices,
    MotorVehicleRental,
    OtherServices,
}

impl ServiceCategory {
    /// Phrase used when naming the service in reverse-charge remarks.
    pub(crate) fn remark_name(self) -> &'static str {
        match self {
            ServiceCategory::Oidar => "OIDAR services",
            ServiceCategory::ImmovablePropertyRelated => "services related to immovable property",
            ServiceCategory::LegalServices => "legal services",
            ServiceCategory::GoodsTransportAgency => "GTA services",
            ServiceCategory::SecurityServices => "security services",
            ServiceCategory::DirectorServices => "director services",
            ServiceCategory::SponsorshipServices => "sponsorship services",
            ServiceCategory::InsuranceAgentServices => "insurance agent services",
            ServiceCategory::RecoveryAgentServices => "recovery agent services",
            ServiceCategory::MotorVehicleRental => "rental of motor vehicle",
            ServiceCategory::OtherServices => "other services",
        }
    }
}

/// One applicability check as submitted from the portal or CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRequest {
    pub supply_kind: Option<SupplyKind>,
    pub location: Option<TransactionLocation>,
    pub supplier_state: Option<StateCode>,
    pub recipient_state: Option<StateCode>,
    pub registration: Option<RecipientRegistration>,
    pub service_category: Option<ServiceCategory>,
    #[serde(default)]
    pub supplier_is_foreign: bool,
    #[serde(default)]
    pub recipient_is_ntor: bool,
    pub value: f64,
}

/// Which levy the supply attracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstLevy {
    /// Intra-state dual component.
    CgstSgst,
    /// Inter-state single component.
    Igst,
    IgstZeroRated,
    IgstOnImport,
}

impl GstLevy {
    pub const fn label(self) -> &'static str {
        match self {
            GstLevy::CgstSgst => "CGST + SGST",
            GstLevy::Igst => "IGST",
            GstLevy::IgstZeroRated => "IGST (Zero-Rated)",
            GstLevy::IgstOnImport => "IGST (on import)",
        }
    }
}

/// Which party bears the remittance liability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeMechanism {
    ForwardCharge,
    ReverseCharge,
    ForeignSupplierForwardCharge,
    Indeterminate,
}

impl ChargeMechanism {
    pub const fn label(self) -> &'static str {
        match self {
            ChargeMechanism::ForwardCharge => "Forward Charge (FCM)",
            ChargeMechanism::ReverseCharge => "Reverse Charge (RCM)",
            ChargeMechanism::ForeignSupplierForwardCharge => {
                "Forward Charge (FCM) by Foreign Supplier"
            }
            ChargeMechanism::Indeterminate => "Not applicable directly (complex)",
        }
    }
}

/// Outcome of an applicability check. Early validation failures carry only
/// the applicability flag and message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstApplicability {
    pub applicable: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<ChargeMechanism>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levy: Option<GstLevy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_supply: Option<String>,
    pub remarks: String,
}

impl GstApplicability {
    pub(crate) fn not_applicable(message: impl Into<String>) -> Self {
        Self {
            applicable: false,
            message: message.into(),
            charge: None,
            levy: None,
            place_of_supply: None,
            remarks: String::new(),
        }
    }
}
