pub mod dates;
pub mod offer;
pub mod payload;
