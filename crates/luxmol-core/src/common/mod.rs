pub mod constants;
pub mod photopic;
