pub mod key;
pub mod value;
