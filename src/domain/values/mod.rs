pub mod growth;
pub mod series_kind;
