pub mod json_localizer;
