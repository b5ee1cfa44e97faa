#![warn(clippy::all, rust_2018_idioms)]

pub mod ads;
pub mod app;
pub mod background;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod geometry;
pub mod layout;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod style;
pub mod text;

pub use app::StarzApp;
pub use background::BackgroundImage;
pub use config::{CanvasSize, DrawConfig, DrawMode};
pub use error::{ConfigError, ExportError, FontLoadError, ImageLoadError, SettingsError};
pub use geometry::{Geometry, Segment};
pub use renderer::{RenderOutcome, Renderer};
pub use settings::Settings;
pub use style::StrokeStyle;
