//! Public assembly surface: configuration, settings, localization, text
//! formatting, and the template record builder.

pub mod assembler;
pub mod locale;
pub mod render_config;
pub mod settings;
pub mod template_record;
pub mod text_fields;

pub use assembler::{ActivePoint, ActivePointSet, ChartTemplateAssembler};
pub use locale::Locale;
pub use render_config::{ChartTheme, RenderConfig, default_active_points};
pub use settings::{AspectSetting, CelestialPointSetting, ChartColorPalette, ChartSettings};
pub use template_record::{REQUIRED_FIELDS, TemplateRecord, TemplateValue};
pub use text_fields::{
    ayanamsa_display_name, format_datetime_minutes, format_datetime_with_offset, format_location,
    latitude_to_string, longitude_to_string,
};
