pub mod error;
pub mod subject;
pub mod table;

pub use error::RiskError;
pub use subject::Subject;
pub use table::{RiskRow, RiskTable, TableRow, WeightedRisk};
