use crate::coerce::Coercion;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScrapeConfig {
    /// Where records and their fields live in the document
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Parameters of the summary report printed by the binary
    #[serde(default)]
    pub report: ReportConfig,
}

/// Record boundary and field selectors
#[derive(Debug, Deserialize, Clone)]
pub struct LayoutConfig {
    /// `tag.class` of the element that bounds one record
    #[serde(default = "default_record")]
    pub record: String,
    /// Fields in output order
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            record: default_record(),
            fields: default_fields(),
        }
    }
}

/// One named field inside a record
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FieldConfig {
    pub name: String,
    /// `tag.class`, searched only inside the record element
    pub selector: String,
    #[serde(default)]
    pub coercion: Coercion,
}

impl FieldConfig {
    fn new(name: &str, selector: &str, coercion: Coercion) -> Self {
        Self {
            name: name.to_string(),
            selector: selector.to_string(),
            coercion,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Characters of raw HTML shown before extraction
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    #[serde(default = "default_price_column")]
    pub price_column: String,
    /// Rows priced above this are listed separately
    #[serde(default = "default_price_threshold")]
    pub price_threshold: f64,
    #[serde(default = "default_rating_column")]
    pub rating_column: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
            price_column: default_price_column(),
            price_threshold: default_price_threshold(),
            rating_column: default_rating_column(),
        }
    }
}

// Default value functions
fn default_record() -> String {
    "div.product-item".to_string()
}

fn default_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("name", "h2.product-name", Coercion::Identity),
        FieldConfig::new("price", "p.product-price", Coercion::Currency),
        FieldConfig::new("rating", "div.product-rating", Coercion::Rating),
        FieldConfig::new("availability", "span.availability", Coercion::Identity),
    ]
}

fn default_preview_chars() -> usize {
    300
}

fn default_price_column() -> String {
    "price".to_string()
}

fn default_price_threshold() -> f64 {
    100.0
}

fn default_rating_column() -> String {
    "rating".to_string()
}

impl ScrapeConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PRODUCT_RECORDS__ prefix
    /// 2. product_records.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PRODUCT_RECORDS__REPORT__PRICE_THRESHOLD
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScrapeConfig::load`] for the source priority.
pub fn load_config() -> Result<ScrapeConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("product_records").required(false))
        // Use double underscore for nested: PRODUCT_RECORDS__REPORT__PREVIEW_CHARS
        .add_source(
            Environment::with_prefix("PRODUCT_RECORDS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Load configuration from a TOML string, ignoring the environment
pub fn load_config_from_str(toml: &str) -> Result<ScrapeConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}
