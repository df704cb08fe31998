//! Row types for the six hospital record tables
//!
//! Each struct maps the CSV header names the dataset ships with. Columns not
//! listed here are ignored on load.

use serde::{Deserialize, Serialize};

/// Row of `hospitals.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HospitalRecord {
    pub hospital_id: String,
    pub hospital_name: String,
    pub hospital_state: String,
}

/// Row of `physicians.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhysicianRecord {
    pub physician_id: String,
    pub physician_name: String,
    pub medical_school: String,
    /// Graduation date; only the leading year is used
    pub physician_grad_year: String,
}

/// Row of `patients.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientRecord {
    pub patient_id: String,
    pub patient_name: String,
    pub patient_sex: String,
    pub patient_dob: String,
    pub patient_blood_type: String,
}

/// Row of `payers.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayerRecord {
    pub payer_id: String,
    pub payer_name: String,
}

/// Row of `visits.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitRecord {
    pub visit_id: String,
    pub hospital_id: String,
    pub physician_id: String,
    pub date_of_admission: String,
    pub admission_type: String,
    /// Empty in the source for visits without a recorded complaint
    #[serde(default)]
    pub chief_complaint: Option<String>,
    #[serde(default)]
    pub treatment_description: Option<String>,
    /// Empty while the patient is still admitted
    #[serde(default)]
    pub discharge_date: Option<String>,
    pub visit_status: String,
}

/// Row of `reviews.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewRecord {
    pub review_id: String,
    pub hospital_name: String,
    pub patient_name: String,
    pub physician_name: String,
    pub review: String,
}
