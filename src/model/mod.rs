pub mod labels;
pub mod profile;
pub mod scores;
