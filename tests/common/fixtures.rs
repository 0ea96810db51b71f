use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};
use solardocs_documents::{InstallationRecord, WorkCompletionRecord};
use solardocs_ledger::{NewTransaction, Transaction, TransactionKind};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

/// A filled-in installation form with `modules` serial numbers
/// `WS0001`, `WS0002`, ...
pub fn installation(modules: usize) -> InstallationRecord {
    let mut record: InstallationRecord = serde_json::from_value(installation_json(modules)).unwrap();
    record.set_module_count(modules.to_string());
    record
}

/// The same form as a client would post it: numbers where the input
/// produced numbers.
pub fn installation_json(modules: usize) -> Value {
    let serials: Vec<String> = (1..=modules).map(|i| format!("WS{i:04}")).collect();
    json!({
        "consumerName": "Asha Patil",
        "consumerNumber": 90012345678u64,
        "mobileNumber": "9800000000",
        "email": "asha@example.com",
        "address": "Plot 7, Deopur Dhule",
        "consumerAddress": "Plot 7, Deopur Dhule",
        "sanctionedCapacity": "3",
        "installedCapacityRooftop": "3.3",
        "systemCapacity": "3",
        "installationDate": "2024-02-10",
        "msedclInspectionDate": "2024-02-20",
        "agreementDate": "2024-01-22",
        "cellGSTDate": "2023-12-01",
        "inverterMake": "Growatt",
        "inverterCapacity": "3",
        "moduleManufacturer": "Waaree",
        "moduleWattage": "550",
        "moduleCapacity": "3.3",
        "numberOfModules": modules.to_string(),
        "moduleSerialNumbers": serials,
        "manufacturingYear": "2023",
        "sanctionNumber": "SAN-2024-118",
        "cellManufacturer": "Waaree Cells",
        "cellGstInvoice": "GST-778",
        "installerName": "Ravi Kumar",
        "installerDesignation": "Proprietor",
        "installerPhone": "9811111111",
        "installerEmail": "ravi@example.com",
        "companyName": "Janhavi Enterprises",
        "vendorName": "Janhavi Enterprises",
        "msedclOfficerName": "S. Deshmukh",
        "msedclOfficerDesignation": "Junior Engineer",
        "aadharNumber": "1234 5678 9012",
        "totalCost": "185000"
    })
}

pub fn work_completion() -> WorkCompletionRecord {
    serde_json::from_value(work_completion_json()).unwrap()
}

pub fn work_completion_json() -> Value {
    json!({
        "consumerName": "Asha Patil",
        "consumerAddress": "Plot 7, Deopur Dhule",
        "consumerMobile": 9800000000u64,
        "systemCapacity": 3,
        "installerAddress": "Station Road, Dhule",
        "installerContact": "9811111111"
    })
}

pub fn transaction(kind: TransactionKind, amount: i64, person: &str, day: &str) -> Transaction {
    NewTransaction::new(kind, amount, person)
        .purpose(format!("{kind} by {person}"))
        .timestamp(day)
        .validate(Utc::now())
        .unwrap()
}

/// credit 100 A, debit 40 B, credit 10 A
pub fn simple_ledger() -> Vec<Transaction> {
    vec![
        transaction(TransactionKind::Credit, 100, "A", "2024-03-01"),
        transaction(TransactionKind::Debit, 40, "B", "2024-03-02"),
        transaction(TransactionKind::Credit, 10, "A", "2024-03-03"),
    ]
}
