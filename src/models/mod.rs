pub mod enums;
pub mod lab;
pub mod medication;
pub mod report;

pub use lab::LabResult;
pub use medication::{Medication, Prescription, PrescriptionItem};
pub use report::Report;
