pub mod key;
pub mod record;
