//! Configuration management

mod settings;

pub use settings::{
    AppConfig, GaugeElementConfig, SkillsConfig, Testimonial, TestimonialsConfig, WindowConfig,
    WorksConfig, CONFIG_VERSION,
};
