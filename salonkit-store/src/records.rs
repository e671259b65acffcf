//! Typed records for the seven tenant resource collections.
//!
//! Field names serialize to the names the first release persisted
//! (French, camelCase) so existing stored data keeps loading. Amounts
//! are plain f64 in minor-unit-free FCFA, as stored.
//!
//! No foreign keys are enforced across collections: a `client_id` or
//! `reference_id` may dangle once the target record is deleted, and
//! readers must treat lookups as fallible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salonkit_core::Record;

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    #[serde(rename = "nouvelle")]
    New,
    #[serde(rename = "reguliere")]
    Regular,
    #[serde(rename = "vip")]
    Vip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "dateInscription")]
    pub registered_on: NaiveDate,
    #[serde(rename = "dateAnniversaire", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "statut")]
    pub status: ClientStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "pointsFidelite")]
    pub loyalty_points: u32,
    #[serde(rename = "totalDepense")]
    pub total_spent: f64,
    #[serde(rename = "nombreVisites")]
    pub visit_count: u32,
    #[serde(rename = "derniereVisite", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_visit: Option<NaiveDate>,
    /// Referral link: the client who brought this one in.
    #[serde(rename = "parrainId", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub referrer_id: Option<String>,
    /// Clients this one referred.
    #[serde(rename = "filleuls", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub referrals: Option<Vec<String>>,
}

/// Catalog entry: a service the salon offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "prix")]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "categorie", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub category: Option<String>,
}

/// One performed service (a "prestation"): a client received a catalog
/// service on a date, for an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceVisit {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "typePrestationId")]
    pub service_type_id: String,
    pub date: NaiveDate,
    #[serde(rename = "employe", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub staff_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "montant")]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "categorie")]
    pub category: String,
    #[serde(rename = "prix")]
    pub price: f64,
    #[serde(rename = "prixAchat")]
    pub purchase_price: f64,
    #[serde(rename = "quantite")]
    pub quantity: u32,
    #[serde(rename = "seuilAlerte")]
    pub alert_threshold: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "unite")]
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleItemKind {
    #[serde(rename = "produit")]
    Product,
    #[serde(rename = "prestation")]
    Service,
}

/// One line of a sale. `reference_id` points at a product or a service
/// type and may dangle after a catalog deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(rename = "type")]
    pub kind: SaleItemKind,
    #[serde(rename = "referenceId")]
    pub reference_id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "quantite")]
    pub quantity: u32,
    #[serde(rename = "prixUnitaire")]
    pub unit_price: f64,
    #[serde(rename = "montant")]
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "especes")]
    Cash,
    #[serde(rename = "mobile_money")]
    MobileMoney,
    #[serde(rename = "carte")]
    Card,
    #[serde(rename = "mixte")]
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub client_id: Option<String>,
    pub items: Vec<SaleItem>,
    #[serde(rename = "totalMontant")]
    pub total_amount: f64,
    #[serde(rename = "modePaiement")]
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "categorie")]
    pub category: String,
    pub description: String,
    #[serde(rename = "montant")]
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "confirme")]
    Confirmed,
    #[serde(rename = "en_attente")]
    Pending,
    #[serde(rename = "annule")]
    Cancelled,
    #[serde(rename = "termine")]
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "typePrestationId")]
    pub service_type_id: String,
    pub date: NaiveDate,
    /// Start time, "HH:mm".
    #[serde(rename = "heure")]
    pub time: String,
    /// Duration in minutes.
    #[serde(rename = "duree")]
    pub duration_minutes: u32,
    #[serde(rename = "employe", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub staff_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "statut")]
    pub status: AppointmentStatus,
}

impl_record!(
    Client,
    ServiceType,
    ServiceVisit,
    Product,
    Sale,
    Expense,
    Appointment,
);
