pub mod fallback;
pub mod metrics;
pub mod root;
pub mod status;
