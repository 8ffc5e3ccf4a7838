pub mod analysis_logger;
pub mod contrast_session;
