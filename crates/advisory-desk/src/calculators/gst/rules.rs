use super::domain::{
    ChargeMechanism, GstApplicability, GstLevy, RecipientRegistration, ServiceCategory, StateCode,
    SupplyKind,
};
use crate::calculators::append_remark;

/// Validated view of a request. Domestic supplies always carry both state
/// codes; the validation ladder in [`super::assess`] guarantees it.
pub(crate) struct CheckedRequest<'a> {
    pub(crate) supply_kind: SupplyKind,
    pub(crate) registration: RecipientRegistration,
    pub(crate) locality: CheckedLocality<'a>,
    pub(crate) service_category: Option<ServiceCategory>,
    pub(crate) supplier_is_foreign: bool,
    pub(crate) recipient_is_ntor: bool,
}

pub(crate) enum CheckedLocality<'a> {
    Domestic {
        supplier: &'a StateCode,
        recipient: &'a StateCode,
    },
    Export,
    Import,
}

/// What the locality step established before liability resolution. The levy
/// and place of supply are final; message and remarks may still be rewritten
/// or appended to by the liability chain.
pub(crate) struct LocalityBaseline {
    pub(crate) message: String,
    pub(crate) levy: GstLevy,
    pub(crate) place_of_supply: String,
    pub(crate) remarks: String,
}

pub(crate) fn locality_baseline(request: &CheckedRequest<'_>) -> LocalityBaseline {
    match request.locality {
        CheckedLocality::Domestic {
            supplier,
            recipient,
        } => {
            let (levy, mut place_of_supply) = if supplier == recipient {
                (
                    GstLevy::CgstSgst,
                    format!("Location of Recipient (Intra-state: {})", recipient.as_str()),
                )
            } else {
                (
                    GstLevy::Igst,
                    format!("Location of Recipient (Inter-state: {})", recipient.as_str()),
                )
            };

            if request.supply_kind == SupplyKind::Services {
                if let Some(place) = service_place_override(
                    request.service_category,
                    request.registration,
                    Some(recipient),
                ) {
                    place_of_supply = place;
                }
            }

            LocalityBaseline {
                message: "GST is applicable.".to_string(),
                levy,
                place_of_supply,
                remarks: String::new(),
            }
        }
        CheckedLocality::Export => LocalityBaseline {
            message: "GST is applicable as Zero-Rated Supply. ITC can be claimed. Can be made \
                      with or without LUT/Bond."
                .to_string(),
            levy: GstLevy::IgstZeroRated,
            place_of_supply: "Outside India".to_string(),
            remarks: "No GST charged on invoice, but ITC is available. Recipient is outside \
                      India."
                .to_string(),
        },
        CheckedLocality::Import => LocalityBaseline {
            message: "GST is applicable on import of goods/services.".to_string(),
            levy: GstLevy::IgstOnImport,
            place_of_supply: "Location of Importer (India)".to_string(),
            remarks: "For goods, IGST is paid at customs. For services, Reverse Charge \
                      Mechanism generally applies to the recipient in India."
                .to_string(),
        },
    }
}

/// Place-of-supply overrides for service supplies, first match wins.
///
/// The final arm (unregistered recipient with no state on file) cannot fire
/// for domestic supplies, where both states are mandatory, but it is part of
/// the published rule set and stays in the chain.
pub(crate) fn service_place_override(
    category: Option<ServiceCategory>,
    registration: RecipientRegistration,
    recipient_state: Option<&StateCode>,
) -> Option<String> {
    match (category, recipient_state) {
        (Some(ServiceCategory::ImmovablePropertyRelated), Some(state)) => Some(format!(
            "Location of Immovable Property (State: {})",
            state.as_str()
        )),
        (Some(ServiceCategory::Oidar), _) => Some("Location of Recipient (Online)".to_string()),
        (_, None) if registration == RecipientRegistration::Unregistered => {
            Some("Location of Supplier (as recipient address not available)".to_string())
        }
        _ => None,
    }
}

/// Service natures notified for reverse charge when supplied to a registered
/// recipient within the country.
const REVERSE_CHARGE_SERVICES: [ServiceCategory; 8] = [
    ServiceCategory::LegalServices,
    ServiceCategory::GoodsTransportAgency,
    ServiceCategory::SecurityServices,
    ServiceCategory::DirectorServices,
    ServiceCategory::SponsorshipServices,
    ServiceCategory::InsuranceAgentServices,
    ServiceCategory::RecoveryAgentServices,
    ServiceCategory::MotorVehicleRental,
];

fn reverse_charge_notified(category: ServiceCategory) -> bool {
    REVERSE_CHARGE_SERVICES.contains(&category)
}

/// Resolve which party bears the liability. The chain is evaluated top to
/// bottom and the first matching rule fully determines the outcome; the levy
/// and place of supply keep their baseline values throughout.
pub(crate) fn resolve_liability(
    request: &CheckedRequest<'_>,
    baseline: LocalityBaseline,
) -> GstApplicability {
    let LocalityBaseline {
        message,
        levy,
        place_of_supply,
        mut remarks,
    } = baseline;

    let settled = |message: String, charge: ChargeMechanism, applicable: bool, remarks: String| {
        GstApplicability {
            applicable,
            message,
            charge: Some(charge),
            levy: Some(levy),
            place_of_supply: Some(place_of_supply.clone()),
            remarks,
        }
    };

    if matches!(request.locality, CheckedLocality::Import)
        && request.supply_kind == SupplyKind::Services
    {
        append_remark(&mut remarks, "Recipient is liable to pay GST under RCM.");
        return settled(message, ChargeMechanism::ReverseCharge, true, remarks);
    }

    if request.service_category == Some(ServiceCategory::Oidar) && request.supplier_is_foreign {
        if request.recipient_is_ntor {
            append_remark(
                &mut remarks,
                "Foreign OIDAR service provider must register and pay GST in India (Forward \
                 Charge) if recipient is Non-Taxable Online Recipient (NTOR).",
            );
            return settled(
                "GST (IGST) is applicable. Foreign OIDAR service provider is liable to collect \
                 and remit GST if service is to a Non-Taxable Online Recipient (NTOR) in India."
                    .to_string(),
                ChargeMechanism::ForeignSupplierForwardCharge,
                true,
                remarks,
            );
        }

        if request.registration == RecipientRegistration::Registered {
            append_remark(
                &mut remarks,
                "Recipient (registered person) is liable to pay GST under RCM for OIDAR \
                 services received from foreign supplier.",
            );
            return settled(message, ChargeMechanism::ReverseCharge, true, remarks);
        }

        return settled(
            "Complex scenario for OIDAR from foreign supplier to unregistered non-NTOR. \
             Consult professional."
                .to_string(),
            ChargeMechanism::Indeterminate,
            false,
            remarks,
        );
    }

    if request.registration == RecipientRegistration::Registered
        && matches!(request.locality, CheckedLocality::Domestic { .. })
        && request.supply_kind == SupplyKind::Services
    {
        if let Some(category) = request.service_category {
            if reverse_charge_notified(category) {
                append_remark(
                    &mut remarks,
                    &format!(
                        "Recipient (registered person) is liable to pay GST under RCM for {}.",
                        category.remark_name()
                    ),
                );
                return settled(message, ChargeMechanism::ReverseCharge, true, remarks);
            }
        }
    }

    append_remark(
        &mut remarks,
        "Supplier is liable to pay GST under Forward Charge.",
    );
    settled(message, ChargeMechanism::ForwardCharge, true, remarks)
}
