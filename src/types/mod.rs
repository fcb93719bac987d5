pub mod analysis;
pub mod currency;
pub mod decimal;
pub mod indicator;
pub mod prediction;
pub mod series;

pub use analysis::*;
pub use currency::*;
pub use indicator::*;
pub use prediction::*;
pub use series::*;
