pub mod audio;
pub mod gamebox;
pub mod host;
