pub mod metadata;
pub mod parser;
pub mod record;
pub mod validate;
