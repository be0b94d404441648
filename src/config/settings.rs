//! Application and page configuration

use anyhow::{Context, Result};
use folio_types::{GaugeStyle, SlideText, SliderOptions, COLOR_ATTR, PERCENTAGE_ATTR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Window dimensions
    #[serde(default)]
    pub window: WindowConfig,
    /// Works slider and its description texts
    #[serde(default)]
    pub works: WorksConfig,
    /// Skill gauges
    #[serde(default)]
    pub skills: SkillsConfig,
    /// Testimonials slider
    #[serde(default)]
    pub testimonials: TestimonialsConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults when missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::info!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "folio", "folio")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        config
            .skills
            .style
            .validate()
            .with_context(|| format!("gauge style in {}", path.display()))?;
        if config.version > CONFIG_VERSION {
            log::warn!(
                "Config {} has version {}, newer than supported {}",
                path.display(),
                config.version,
                CONFIG_VERSION
            );
        }
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            window: WindowConfig::default(),
            works: WorksConfig::default(),
            skills: SkillsConfig::default(),
            testimonials: TestimonialsConfig::default(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_window_width() -> i32 {
    1024
}

fn default_window_height() -> i32 {
    720
}

fn default_title() -> String {
    "Folio".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_title(),
        }
    }
}

/// Works section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksConfig {
    #[serde(default = "SliderOptions::works")]
    pub slider: SliderOptions,
    /// One text per slide id; slides are created in this order
    #[serde(default = "SlideText::default_works")]
    pub entries: Vec<SlideText>,
}

impl Default for WorksConfig {
    fn default() -> Self {
        Self {
            slider: SliderOptions::works(),
            entries: SlideText::default_works(),
        }
    }
}

/// One gauge host element on the page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeElementConfig {
    /// Caption shown under the gauge
    pub title: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_gauge_classes")]
    pub classes: Vec<String>,
    /// Raw markup attributes, validated when the page is built
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Rendered width in logical pixels
    #[serde(default = "default_gauge_width")]
    pub width: f64,
}

fn default_gauge_classes() -> Vec<String> {
    vec!["counter".to_string()]
}

fn default_gauge_width() -> f64 {
    150.0
}

impl GaugeElementConfig {
    pub fn counter(title: &str, percentage: u8, color: &str) -> Self {
        Self {
            title: title.to_string(),
            id: Some(format!("skill-{}", title.to_ascii_lowercase().replace(' ', "-"))),
            classes: default_gauge_classes(),
            attributes: BTreeMap::from([
                (PERCENTAGE_ATTR.to_string(), percentage.to_string()),
                (COLOR_ATTR.to_string(), color.to_string()),
            ]),
            width: default_gauge_width(),
        }
    }
}

/// Skills section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(default = "SliderOptions::skills")]
    pub slider: SliderOptions,
    /// Selector picking gauge hosts out of the page
    #[serde(default = "default_gauge_selector")]
    pub selector: String,
    #[serde(default)]
    pub style: GaugeStyle,
    /// Reset gauges when scrolling back above the section
    #[serde(default)]
    pub replay: bool,
    #[serde(default = "default_skill_items")]
    pub items: Vec<GaugeElementConfig>,
}

fn default_gauge_selector() -> String {
    ".counter".to_string()
}

fn default_skill_items() -> Vec<GaugeElementConfig> {
    vec![
        GaugeElementConfig::counter("HTML", 90, "#e44d26"),
        GaugeElementConfig::counter("CSS", 85, "#264de4"),
        GaugeElementConfig::counter("JavaScript", 75, "#f0db4f"),
        GaugeElementConfig::counter("Rust", 60, "#dea584"),
        GaugeElementConfig::counter("Figma", 70, "#a259ff"),
        GaugeElementConfig::counter("Git", 80, "#f1502f"),
    ]
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            slider: SliderOptions::skills(),
            selector: default_gauge_selector(),
            style: GaugeStyle::default(),
            replay: false,
            items: default_skill_items(),
        }
    }
}

/// A single testimonial slide
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
}

/// Testimonials section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsConfig {
    #[serde(default = "SliderOptions::testimonials")]
    pub slider: SliderOptions,
    #[serde(default = "default_testimonials")]
    pub quotes: Vec<Testimonial>,
}

fn default_testimonials() -> Vec<Testimonial> {
    let quote = |author: &str, quote: &str| Testimonial {
        author: author.to_string(),
        quote: quote.to_string(),
    };
    vec![
        quote(
            "Anna K.",
            "Lorem ipsum dolor sit amet consectetur adipisicing elit. Quae, cumque.",
        ),
        quote(
            "Mark T.",
            "Lorem ipsum dolor sit amet consectetur adipisicing elit. Nesciunt, sequi?",
        ),
        quote(
            "Julia R.",
            "Lorem ipsum dolor sit, amet consectetur adipisicing elit. Eveniet, ab!",
        ),
    ]
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            slider: SliderOptions::testimonials(),
            quotes: default_testimonials(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{GaugeAttributes, StyleError, DEFAULT_GAUGE_DURATION_MS};

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.skills.selector, ".counter");
        assert_eq!(config.skills.items.len(), 6);
        assert_eq!(config.works.entries.len(), 5);
        assert_eq!(config.works.slider.space_between, 25);
        assert_eq!(config.skills.slider.slides_per_view, 3);
        assert_eq!(config.skills.style.duration_ms, DEFAULT_GAUGE_DURATION_MS);
    }

    #[test]
    fn test_default_items_carry_valid_attributes() {
        for item in SkillsConfig::default().items {
            let attrs = GaugeAttributes::from_lookup(|name| item.attributes.get(name).cloned());
            assert!(attrs.is_ok(), "{}: {:?}", item.title, attrs);
        }
    }

    #[test]
    fn test_partial_skills_section() {
        let json = r##"{
            "skills": {
                "replay": true,
                "items": [
                    { "title": "Go", "attributes": { "data-cp-percentage": "30", "data-cp-color": "#00add8" } }
                ]
            }
        }"##;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.skills.replay);
        assert_eq!(config.skills.items[0].classes, vec!["counter".to_string()]);
        assert_eq!(config.skills.items[0].width, 150.0);
        assert_eq!(config.skills.style.radius, 140.0);
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = std::env::temp_dir().join(format!("folio-config-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.window.title = "Portfolio".to_string();
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.window.title, "Portfolio");
        assert_eq!(loaded.skills.items, config.skills.items);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = std::env::temp_dir().join(format!("folio-bad-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_zero_duration() {
        let dir = std::env::temp_dir().join(format!("folio-zero-duration-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "skills": { "style": { "duration_ms": 0 } } }"#).unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("gauge style"));
        assert_eq!(
            err.downcast_ref::<StyleError>(),
            Some(&StyleError::ZeroDuration)
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
