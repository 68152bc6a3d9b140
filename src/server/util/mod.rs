pub mod markdown;
pub mod password;
pub mod validate;
