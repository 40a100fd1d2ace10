//! Calibration record data model

pub mod due_date;
pub mod range;
pub mod record;
pub mod results;
pub mod traceability;

pub use due_date::{DateLike, DueDateRequest};
pub use range::{CalibrationRange, MassUnit};
pub use record::{CalibrationRecord, RangeRecord, RecordError};
pub use results::{CalibrationResultSeries, EccentricityTest, RepeatabilityTest};
pub use traceability::TraceabilityConfig;
