pub mod color_sampler;
pub mod contrast;
pub mod dedup;
pub mod frame_sampler;
