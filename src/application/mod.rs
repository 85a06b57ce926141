pub mod comparison;
pub mod ingest;
pub mod report;
