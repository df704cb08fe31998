//! CSV record loading
//!
//! All six tables are required. A missing or malformed file fails the whole
//! load; there is no partial dataset.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::record::{
    HospitalRecord, PatientRecord, PayerRecord, PhysicianRecord, ReviewRecord, VisitRecord,
};

pub const HOSPITALS_FILE: &str = "hospitals.csv";
pub const PHYSICIANS_FILE: &str = "physicians.csv";
pub const PATIENTS_FILE: &str = "patients.csv";
pub const VISITS_FILE: &str = "visits.csv";
pub const PAYERS_FILE: &str = "payers.csv";
pub const REVIEWS_FILE: &str = "reviews.csv";

/// The six record tables, fully loaded in memory
#[derive(Debug, Clone, Default)]
pub struct HospitalDataset {
    pub hospitals: Vec<HospitalRecord>,
    pub physicians: Vec<PhysicianRecord>,
    pub patients: Vec<PatientRecord>,
    pub visits: Vec<VisitRecord>,
    pub payers: Vec<PayerRecord>,
    pub reviews: Vec<ReviewRecord>,
}

impl HospitalDataset {
    /// Load every table from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        tracing::info!("Loading hospital records from {}", dir.display());

        let dataset = Self {
            hospitals: read_table(dir, HOSPITALS_FILE)?,
            physicians: read_table(dir, PHYSICIANS_FILE)?,
            patients: read_table(dir, PATIENTS_FILE)?,
            visits: read_table(dir, VISITS_FILE)?,
            payers: read_table(dir, PAYERS_FILE)?,
            reviews: read_table(dir, REVIEWS_FILE)?,
        };

        tracing::info!(
            "Loaded {} hospitals, {} physicians, {} patients, {} visits, {} payers, {} reviews",
            dataset.hospitals.len(),
            dataset.physicians.len(),
            dataset.patients.len(),
            dataset.visits.len(),
            dataset.payers.len(),
            dataset.reviews.len()
        );

        Ok(dataset)
    }

    /// Total number of rows across all tables
    pub fn total_rows(&self) -> usize {
        self.hospitals.len()
            + self.physicians.len()
            + self.patients.len()
            + self.visits.len()
            + self.payers.len()
            + self.reviews.len()
    }
}

/// Deserialize every row of `dir/file` by header name; field values are
/// kept verbatim.
fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(&path)
        .map_err(|e| Error::data_load(file, e))?;

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| Error::data_load(file, e))?;

    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;

    /// Write a small but complete dataset into `dir`
    pub(crate) fn write_fixture(dir: &Path) {
        fs::write(
            dir.join(HOSPITALS_FILE),
            "hospital_id,hospital_name,hospital_state\n1,St. Mary,CA\n2,Wheeler,TX\n",
        )
        .unwrap();
        fs::write(
            dir.join(PHYSICIANS_FILE),
            "physician_name,physician_id,physician_dob,physician_grad_year,medical_school,salary\n\
             Joseph Johnson,10,1970-02-22,1996-02-22,Johns Hopkins University School of Medicine,309534.16\n",
        )
        .unwrap();
        fs::write(
            dir.join(PATIENTS_FILE),
            "patient_name,patient_sex,patient_id,patient_dob,patient_blood_type\n\
             Tracey Ramirez,Female,20,1990-05-14,A+\n",
        )
        .unwrap();
        fs::write(
            dir.join(VISITS_FILE),
            "patient_id,date_of_admission,billing_amount,room_number,admission_type,discharge_date,test_results,visit_id,physician_id,payer_id,hospital_id,chief_complaint,treatment_description,primary_diagnosis,visit_status\n\
             20,2022-11-17,37490.98,146,Elective,2022-12-01,Inconclusive,30,10,5,1,,,Migraine,DISCHARGED\n\
             20,2023-01-02,1200.00,12,Emergency,,Normal,31,10,5,2,Chest pain,ECG and observation,Angina,OPEN\n",
        )
        .unwrap();
        fs::write(
            dir.join(PAYERS_FILE),
            "payer_id,payer_name\n5,Medicaid\n",
        )
        .unwrap();
        fs::write(
            dir.join(REVIEWS_FILE),
            "review_id,visit_id,review,physician_name,hospital_name,patient_name\n\
             40,30,\"Staff were kind, rooms were clean\",Joseph Johnson,St. Mary,Tracey Ramirez\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_reads_all_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let dataset = HospitalDataset::load(dir.path()).unwrap();
        assert_eq!(dataset.hospitals.len(), 2);
        assert_eq!(dataset.physicians.len(), 1);
        assert_eq!(dataset.patients.len(), 1);
        assert_eq!(dataset.visits.len(), 2);
        assert_eq!(dataset.payers.len(), 1);
        assert_eq!(dataset.reviews.len(), 1);
        assert_eq!(dataset.total_rows(), 8);

        assert_eq!(dataset.hospitals[0].hospital_name, "St. Mary");
        assert_eq!(dataset.reviews[0].review, "Staff were kind, rooms were clean");
    }

    #[test]
    fn test_empty_fields_load_as_none() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let dataset = HospitalDataset::load(dir.path()).unwrap();
        let first = &dataset.visits[0];
        assert_eq!(first.chief_complaint, None);
        assert_eq!(first.treatment_description, None);
        assert_eq!(first.discharge_date.as_deref(), Some("2022-12-01"));

        let second = &dataset.visits[1];
        assert_eq!(second.chief_complaint.as_deref(), Some("Chest pain"));
        assert_eq!(second.discharge_date, None);
    }

    #[test]
    fn test_free_text_is_not_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(
            dir.path().join(REVIEWS_FILE),
            " review_id ,visit_id,review,physician_name,hospital_name,patient_name\n\
             40,30,\"  Great care.  \",Joseph Johnson,St. Mary,Tracey Ramirez\n",
        )
        .unwrap();

        let dataset = HospitalDataset::load(dir.path()).unwrap();
        assert_eq!(dataset.reviews[0].review_id, "40");
        assert_eq!(dataset.reviews[0].review, "  Great care.  ");
    }

    #[test]
    fn test_missing_file_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::remove_file(dir.path().join(PAYERS_FILE)).unwrap();

        match HospitalDataset::load(dir.path()) {
            Err(Error::DataLoad { file, .. }) => assert_eq!(file, PAYERS_FILE),
            other => panic!("expected data load error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(
            dir.path().join(HOSPITALS_FILE),
            "hospital_id,hospital_name\n1,St. Mary\n",
        )
        .unwrap();

        match HospitalDataset::load(dir.path()) {
            Err(Error::DataLoad { file, .. }) => assert_eq!(file, HOSPITALS_FILE),
            other => panic!("expected data load error, got {:?}", other),
        }
    }
}
