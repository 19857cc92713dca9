pub mod adapt;
pub mod labels;

pub use adapt::{adapt_many, adapt_one};
