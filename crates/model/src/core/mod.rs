pub mod date;
pub mod error;
pub mod format;
pub mod policy;
pub mod value;
pub mod zone;
