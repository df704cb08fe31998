//! Rendering of record rows into natural-language documents
//!
//! Every row becomes exactly one [`Document`]. Rendering is all-or-nothing: a
//! row with a malformed year or date fails the whole batch.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::loader::HospitalDataset;
use crate::error::{Error, Result};
use crate::types::document::{Document, DocumentKind, DocumentMetadata};
use crate::types::record::{
    HospitalRecord, PatientRecord, PayerRecord, PhysicianRecord, ReviewRecord, VisitRecord,
};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Render every row of the dataset.
///
/// Output order is hospitals, physicians, patients, payers, visits, reviews.
/// `current_year` is used for patient ages.
pub fn build_documents(dataset: &HospitalDataset, current_year: i32) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(dataset.total_rows());

    documents.extend(dataset.hospitals.iter().map(hospital_document));
    for physician in &dataset.physicians {
        documents.push(physician_document(physician)?);
    }
    for patient in &dataset.patients {
        documents.push(patient_document(patient, current_year)?);
    }
    documents.extend(dataset.payers.iter().map(payer_document));
    documents.extend(dataset.visits.iter().map(visit_document));
    documents.extend(dataset.reviews.iter().map(review_document));

    tracing::info!("Processed {} documents", documents.len());
    Ok(documents)
}

pub fn hospital_document(hospital: &HospitalRecord) -> Document {
    Document::new(
        format!(
            "The hospital {} is located in {}.",
            hospital.hospital_name, hospital.hospital_state
        ),
        DocumentMetadata::named(
            DocumentKind::Hospital,
            &hospital.hospital_id,
            &hospital.hospital_name,
        ),
    )
}

pub fn physician_document(physician: &PhysicianRecord) -> Result<Document> {
    let grad_year = leading_year(&physician.physician_grad_year).ok_or_else(|| {
        Error::format(
            DocumentKind::Physician.as_str(),
            &physician.physician_id,
            format!(
                "graduation date '{}' does not start with a year",
                physician.physician_grad_year
            ),
        )
    })?;

    Ok(Document::new(
        format!(
            "Dr. {} graduated from {} in {}.",
            physician.physician_name, physician.medical_school, grad_year
        ),
        DocumentMetadata::named(
            DocumentKind::Physician,
            &physician.physician_id,
            &physician.physician_name,
        ),
    ))
}

pub fn patient_document(patient: &PatientRecord, current_year: i32) -> Result<Document> {
    let birth_year = parse_year(&patient.patient_dob).ok_or_else(|| {
        Error::format(
            DocumentKind::Patient.as_str(),
            &patient.patient_id,
            format!("unparseable date of birth '{}'", patient.patient_dob),
        )
    })?;
    // Calendar-year difference, birthdays are not taken into account
    let age = current_year - birth_year;

    Ok(Document::new(
        format!(
            "Patient {}, {}, born in {} ({} years). Blood type: {}",
            patient.patient_name, patient.patient_sex, birth_year, age, patient.patient_blood_type
        ),
        DocumentMetadata::named(
            DocumentKind::Patient,
            &patient.patient_id,
            &patient.patient_name,
        ),
    ))
}

pub fn payer_document(payer: &PayerRecord) -> Document {
    Document::new(
        format!("Insurer: {}.", payer.payer_name),
        DocumentMetadata::named(DocumentKind::Payer, &payer.payer_id, &payer.payer_name),
    )
}

pub fn visit_document(visit: &VisitRecord) -> Document {
    let mut content = format!(
        "Hospital visit on {}, admission type: {}",
        visit.date_of_admission, visit.admission_type
    );
    if let (Some(complaint), Some(treatment)) = (
        present(&visit.chief_complaint),
        present(&visit.treatment_description),
    ) {
        content.push_str(&format!(". Reason: {}. Treatment: {}", complaint, treatment));
    }
    if let Some(discharge) = present(&visit.discharge_date) {
        content.push_str(&format!(". Discharge date: {}", discharge));
    }
    content.push_str(&format!(". Status: {}", visit.visit_status));

    let mut metadata = DocumentMetadata::unnamed(DocumentKind::Visit, &visit.visit_id);
    metadata.hospital_id = Some(visit.hospital_id.clone());
    metadata.physician_id = Some(visit.physician_id.clone());

    Document::new(content, metadata)
}

pub fn review_document(review: &ReviewRecord) -> Document {
    let mut metadata = DocumentMetadata::unnamed(DocumentKind::Review, &review.review_id);
    metadata.hospital = Some(review.hospital_name.clone());
    metadata.physician = Some(review.physician_name.clone());

    Document::new(
        format!(
            "Review of hospital {} by {} about Dr. {}: {}.",
            review.hospital_name, review.patient_name, review.physician_name, review.review
        ),
        metadata,
    )
}

/// Optional column value, treating blank strings as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// First four characters, if they are a year
fn leading_year(value: &str) -> Option<&str> {
    let year = value.get(..4)?;
    year.bytes().all(|b| b.is_ascii_digit()).then_some(year)
}

/// Calendar year of a date or timestamp string
fn parse_year(value: &str) -> Option<i32> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .map(|date| date.year())
}
