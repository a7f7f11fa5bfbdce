//! Invoice and customer record types.

use serde::Deserialize;

/// A customer invoice as exported by the ERP.
///
/// Every field is optional: older exports omit the numeric id, and partial
/// records must still produce a ticket request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Invoice {
    /// Internal numeric id of the invoice row.
    #[serde(default)]
    pub id: Option<i64>,

    /// Public invoice reference (e.g. `FA2024-0001`).
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,

    /// Invoice total, taxes included.
    #[serde(default)]
    pub total_ttc: Option<f64>,
}

/// A business-partner (customer) record attached to an invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct Thirdparty {
    /// Internal numeric id of the customer row.
    pub id: i64,

    /// Customer display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,

    /// First professional/tax identifier.
    #[serde(default)]
    pub idprof1: Option<String>,

    /// Second professional/tax identifier.
    #[serde(default)]
    pub idprof2: Option<String>,
}

impl Thirdparty {
    /// Returns the best available tax identification for this customer.
    ///
    /// Falls back through `idprof1`, then `idprof2`, then the numeric
    /// customer id. Empty strings count as missing.
    #[must_use]
    pub fn identification(&self) -> String {
        non_empty(self.idprof1.as_deref())
            .or_else(|| non_empty(self.idprof2.as_deref()))
            .map_or_else(|| self.id.to_string(), ToString::to_string)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
