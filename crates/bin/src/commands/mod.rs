pub mod record;
pub mod text;
pub mod time;
