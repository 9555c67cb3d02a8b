mod length;

pub use length::validate_length;
