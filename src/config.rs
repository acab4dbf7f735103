//! Widget defaults
//!
//! Every section and field is optional in TOML; missing values fall back to
//! the defaults below.
//!
//! ```toml
//! [table]
//! default_page_size = 20
//!
//! [mask]
//! mask_char = "#"
//! placeholders = { "9" = "digit", "a" = "letter" }
//!
//! [calendar]
//! locale = "de-DE"
//! week_start = "monday"
//! ```

use crate::error::Result;
use crate::i18n::Locale;
use crate::mask::{CharClass, Mask, MaskSyntax, MaskedInput, DEFAULT_MASK_CHAR};
use crate::select::{OptionList, SelectOption};
use crate::table::{PaginationState, DEFAULT_PAGE_SIZE};
use anyhow::Context;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Defaults for every widget kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub table: TableConfig,
    pub mask: MaskConfig,
    pub calendar: CalendarConfig,
    pub select: SelectConfig,
}

impl WidgetConfig {
    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded widget config");
        Ok(config)
    }
}

/// Table defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub default_page_size: usize,
    /// Choices offered by a page size control
    pub page_size_options: Vec<usize>,
    /// Page numbers shown on each side of the current one
    pub sibling_count: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![5, 10, 20, 50, 100],
            sibling_count: 1,
        }
    }
}

impl TableConfig {
    /// First page at the configured size
    pub fn pagination(&self) -> PaginationState {
        PaginationState::new(0, self.default_page_size)
    }
}

/// Mask defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    pub mask_char: char,
    pub show_placeholders: bool,
    /// Pattern characters that stand for input slots
    pub placeholders: BTreeMap<char, CharClass>,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            show_placeholders: false,
            placeholders: BTreeMap::from([('9', CharClass::Digit)]),
        }
    }
}

impl MaskConfig {
    /// Placeholder table for parsing string masks
    pub fn syntax(&self) -> MaskSyntax {
        MaskSyntax::new(self.placeholders.clone())
    }

    /// Input field for `pattern` using these settings
    pub fn input(&self, pattern: &str) -> MaskedInput {
        MaskedInput::new(Mask::parse_with(pattern, &self.syntax()))
            .with_mask_char(self.mask_char)
            .with_placeholders(self.show_placeholders)
    }
}

/// Calendar defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Locale tag such as "en-US"
    pub locale: String,
    /// Overrides the locale's first day of the week
    #[serde(with = "weekday_name")]
    pub week_start: Option<Weekday>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            week_start: Some(Weekday::Sun),
        }
    }
}

impl CalendarConfig {
    /// Locale with the configured week start applied
    pub fn locale(&self) -> Locale {
        let locale = Locale::from_string(&self.locale);
        match self.week_start {
            Some(day) => locale.with_week_start(day),
            None => locale,
        }
    }
}

/// Select defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    pub searchable: bool,
    pub multiple: bool,
}

impl SelectConfig {
    /// Option list with these defaults
    pub fn list(&self, options: Vec<SelectOption>) -> OptionList {
        OptionList::new(options)
            .with_searchable(self.searchable)
            .with_multiple(self.multiple)
    }
}

/// Weekdays as lowercase names; parsing also takes `Monday` or `mon`
mod weekday_name {
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Option<Weekday>, s: S) -> Result<S::Ok, S::Error> {
        match day {
            Some(day) => s.serialize_str(&day.to_string().to_lowercase()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Weekday>, D::Error> {
        let name = Option::<String>::deserialize(d)?;
        name.map(|n| {
            n.parse::<Weekday>()
                .map_err(|_| de::Error::custom(format!("unknown weekday {n:?}")))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.table.default_page_size, 10);
        assert_eq!(config.table.page_size_options, vec![5, 10, 20, 50, 100]);
        assert_eq!(config.table.sibling_count, 1);
        assert_eq!(config.mask.mask_char, '_');
        assert!(!config.mask.show_placeholders);
        assert_eq!(config.calendar.locale().week_start, Weekday::Sun);
        assert!(!config.select.searchable);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(WidgetConfig::from_toml_str("").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = WidgetConfig::from_toml_str(
            r##"
            [table]
            default_page_size = 20

            [mask]
            mask_char = "#"
            placeholders = { "9" = "digit", "a" = "letter" }

            [calendar]
            locale = "de-DE"
            week_start = "Monday"

            [select]
            multiple = true
            "##,
        )
        .unwrap();

        assert_eq!(config.table.pagination(), PaginationState::new(0, 20));
        assert_eq!(config.table.sibling_count, 1);
        assert_eq!(config.mask.syntax().class_for('a'), Some(CharClass::Letter));
        assert_eq!(config.calendar.locale().week_start, Weekday::Mon);
        assert_eq!(config.calendar.locale().date_format, "%d.%m.%Y");
        assert!(config.select.multiple);
        assert!(!config.select.searchable);
    }

    #[test]
    fn test_mask_input_from_config() {
        let config = MaskConfig {
            show_placeholders: true,
            ..MaskConfig::default()
        };
        let mut input = config.input("99/99");
        input.set_raw("1");
        assert_eq!(input.formatted(), "1_/__");
    }

    #[test]
    fn test_invalid_toml() {
        let err = WidgetConfig::from_toml_str("[table]\ndefault_page_size = \"ten\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = WidgetConfig::from_toml_str("[calendar]\nweek_start = \"someday\"").unwrap_err();
        assert!(err.to_string().contains("someday"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WidgetConfig::load("/nonexistent/widgetkit.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/widgetkit.toml"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(WidgetConfig::default()).unwrap();
        assert_eq!(json["calendar"]["week_start"], "sun");
        assert_eq!(json["mask"]["placeholders"]["9"], "digit");
        let back: WidgetConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, WidgetConfig::default());
    }
}
