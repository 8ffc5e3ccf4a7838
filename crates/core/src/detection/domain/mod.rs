pub mod text_localizer;
