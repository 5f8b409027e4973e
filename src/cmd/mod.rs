pub mod batch;
pub mod curve;
pub mod options;
pub mod score;
