pub mod entities;
pub mod fixtures;
pub mod use_cases;
