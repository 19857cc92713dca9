pub mod criteria;
pub mod plant;

pub use criteria::{Criteria, LightRequirement, SoilCategory};
pub use plant::{DisplayPlantRecord, RawPlantRecord};
