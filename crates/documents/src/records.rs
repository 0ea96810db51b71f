//! The two form records documents are generated from.
//!
//! Both records deserialise leniently: missing fields take their defaults,
//! and numeric-looking fields accept JSON numbers as well as strings, since
//! the forms send whatever the input element produced.

use crate::error::DocumentError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accepts a string, number or boolean; `null` becomes the empty string.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => {
            return Err(serde::de::Error::custom(format!("expected a string, found {other}")));
        }
    })
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                Value::Null => Ok(String::new()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(serde::de::Error::custom(format!("expected a serial number, found {other}"))),
            })
            .collect(),
        other => Err(serde::de::Error::custom(format!("expected a list, found {other}"))),
    }
}

/// Largest `numberOfModules` a record may carry.
pub const MAX_MODULES: usize = 1000;

/// The multi-purpose installation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallationRecord {
    // Consumer
    pub consumer_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub consumer_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub mobile_number: String,
    pub email: String,
    pub address: String,
    pub consumer_address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub aadhar_number: String,

    // Arrangement
    pub re_arrangement_type: String,
    pub re_source: String,
    pub category: String,
    pub capacity_type: String,
    pub project_model: String,

    // Capacities
    #[serde(deserialize_with = "lenient_string")]
    pub sanctioned_capacity: String,
    #[serde(deserialize_with = "lenient_string")]
    pub installed_capacity_rooftop: String,
    #[serde(deserialize_with = "lenient_string")]
    pub installed_capacity_ground: String,
    #[serde(deserialize_with = "lenient_string")]
    pub installed_capacity_total: String,
    #[serde(deserialize_with = "lenient_string")]
    pub system_capacity: String,

    // Dates
    pub installation_date: String,
    pub msedcl_inspection_date: String,
    pub agreement_date: String,
    #[serde(rename = "cellGSTDate")]
    pub cell_gst_date: String,

    // Equipment
    pub inverter_make: String,
    pub inverter_model: String,
    #[serde(deserialize_with = "lenient_string")]
    pub inverter_capacity: String,
    pub inverter_rating: String,
    pub charge_controller_type: String,
    pub module_manufacturer: String,
    #[serde(deserialize_with = "lenient_string")]
    pub module_wattage: String,
    #[serde(deserialize_with = "lenient_string")]
    pub number_of_modules: String,
    #[serde(deserialize_with = "lenient_string")]
    pub module_capacity: String,
    #[serde(deserialize_with = "lenient_list")]
    pub module_serial_numbers: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub manufacturing_year: String,
    #[serde(deserialize_with = "lenient_string")]
    pub earthing_count: String,
    pub lightning_arrester: String,
    pub warranty_details: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sanction_number: String,
    pub cell_manufacturer: String,
    #[serde(rename = "cellGSTInvoice", deserialize_with = "lenient_string")]
    pub cell_gst_invoice: String,

    // Installer and company
    pub installer_name: String,
    pub installer_designation: String,
    #[serde(deserialize_with = "lenient_string")]
    pub installer_phone: String,
    pub installer_email: String,
    pub company_name: String,
    pub vendor_name: String,

    // Utility officer
    pub msedcl_officer_name: String,
    pub msedcl_officer_designation: String,
    pub msedcl_representative: String,

    // Inline image blobs; empty means absent
    pub customer_signature: String,
    pub vendor_signature: String,
    pub company_stamp: String,
    pub aadhar_image: String,

    #[serde(deserialize_with = "lenient_string")]
    pub total_cost: String,
}

impl Default for InstallationRecord {
    fn default() -> Self {
        Self {
            consumer_name: String::new(),
            consumer_number: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            address: String::new(),
            consumer_address: String::new(),
            aadhar_number: String::new(),
            re_arrangement_type: "Net Metering Arrangement".into(),
            re_source: "solar".into(),
            category: "Private".into(),
            capacity_type: "single phase".into(),
            project_model: "NA".into(),
            sanctioned_capacity: String::new(),
            installed_capacity_rooftop: String::new(),
            installed_capacity_ground: "NA".into(),
            installed_capacity_total: "NA".into(),
            system_capacity: String::new(),
            installation_date: String::new(),
            msedcl_inspection_date: String::new(),
            agreement_date: String::new(),
            cell_gst_date: String::new(),
            inverter_make: String::new(),
            inverter_model: String::new(),
            inverter_capacity: String::new(),
            inverter_rating: "5 star".into(),
            charge_controller_type: "1mppt".into(),
            module_manufacturer: String::new(),
            module_wattage: String::new(),
            number_of_modules: String::new(),
            module_capacity: String::new(),
            module_serial_numbers: Vec::new(),
            manufacturing_year: String::new(),
            earthing_count: "3".into(),
            lightning_arrester: "Yes".into(),
            warranty_details: "30 Years".into(),
            sanction_number: String::new(),
            cell_manufacturer: String::new(),
            cell_gst_invoice: String::new(),
            installer_name: String::new(),
            installer_designation: String::new(),
            installer_phone: String::new(),
            installer_email: String::new(),
            company_name: String::new(),
            vendor_name: String::new(),
            msedcl_officer_name: String::new(),
            msedcl_officer_designation: String::new(),
            msedcl_representative: String::new(),
            customer_signature: String::new(),
            vendor_signature: String::new(),
            company_stamp: String::new(),
            aadhar_image: String::new(),
            total_cost: String::new(),
        }
    }
}

impl InstallationRecord {
    /// `numberOfModules` as a count; anything unparseable counts as zero.
    pub fn module_count(&self) -> usize {
        self.number_of_modules.trim().parse().unwrap_or(0)
    }

    /// Sets `numberOfModules` and resizes the serial list to match.
    ///
    /// Serials below the smaller of the old and new count are kept as they
    /// were; new slots are empty.
    pub fn set_module_count(&mut self, count: impl Into<String>) {
        self.number_of_modules = count.into();
        self.sync_serials();
    }

    /// Brings a freshly deserialised record in line with its module count.
    ///
    /// Fails when `numberOfModules` exceeds [`MAX_MODULES`].
    pub fn normalize(mut self) -> Result<Self, DocumentError> {
        let count = self.module_count();
        if count > MAX_MODULES {
            return Err(DocumentError::InvalidField {
                field: "numberOfModules",
                reason: format!("{count} modules is more than the {MAX_MODULES} a record may list"),
            });
        }
        self.sync_serials();
        Ok(self)
    }

    /// Non-blank serial numbers, in entry order.
    pub fn serials(&self) -> impl Iterator<Item = &str> {
        self.module_serial_numbers
            .iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// The district printed on the commissioning report: the last word of
    /// the installation address.
    pub fn district(&self) -> &str {
        self.address.split(' ').next_back().unwrap_or_default()
    }

    fn sync_serials(&mut self) {
        let count = self.module_count().min(MAX_MODULES);
        self.module_serial_numbers.resize(count, String::new());
    }
}

/// The short work completion and hypothecation letter form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkCompletionRecord {
    pub consumer_name: String,
    pub consumer_address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub consumer_mobile: String,
    #[serde(deserialize_with = "lenient_string")]
    pub system_capacity: String,
    pub bank_name: String,
    pub bank_branch: String,
    pub bank_location: String,
    pub installer_name: String,
    pub installer_address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub installer_contact: String,
}

impl Default for WorkCompletionRecord {
    fn default() -> Self {
        Self {
            consumer_name: String::new(),
            consumer_address: String::new(),
            consumer_mobile: String::new(),
            system_capacity: String::new(),
            bank_name: "SBI Bank".into(),
            bank_branch: "Pramodnagar Branch".into(),
            bank_location: "Dhule".into(),
            installer_name: "JANHAVI ENTERPRISES DHULE".into(),
            installer_address: String::new(),
            installer_contact: String::new(),
        }
    }
}

impl WorkCompletionRecord {
    /// Fails with every required field that is blank, in form order.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let required = [
            ("consumerName", &self.consumer_name),
            ("consumerAddress", &self.consumer_address),
            ("consumerMobile", &self.consumer_mobile),
            ("systemCapacity", &self.system_capacity),
            ("bankName", &self.bank_name),
            ("bankBranch", &self.bank_branch),
            ("bankLocation", &self.bank_location),
            ("installerName", &self.installer_name),
            ("installerAddress", &self.installer_address),
            ("installerContact", &self.installer_contact),
        ];
        let fields: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(DocumentError::Validation { fields })
        }
    }
}
