pub mod constants;
pub mod contrast_event;
pub mod frame;
pub mod text_box;
pub mod video_metadata;
