//! Printable RAB report built from a project and its summary.

pub mod service;
pub mod types;

pub use service::ReportService;
pub use types::{RabReport, RecapKind, RecapLine, ReportAmount, ReportLine, ReportSection};
