//! Built-in resources and the keys of all user-visible strings.

use algo_selector::{Catalog, CatalogError};
use app_core::properties::{Properties, StringLookup};
use strum::{EnumIter, IntoStaticStr};

use super::config::Config;

const DEFAULT_PROPERTIES: &str = include_str!("../../resources/app_properties.txt");
const DEFAULT_CATALOG: &str = include_str!("../../resources/algorithms.json");

/// Keys of the properties file. A variant maps to its name in
/// SCREAMING_SNAKE_CASE, e.g. `ChartTitle` to `CHART_TITLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyKey {
    // window and panes
    WindowTitle,
    LeftPaneTitle,
    ChartTitle,
    SelectText,
    AlgorithmsTitle,

    // toolbar
    NewText,
    NewTooltip,
    SaveText,
    SaveTooltip,
    LoadText,
    LoadTooltip,
    ScreenshotText,
    ScreenshotTooltip,
    ExitText,
    ExitTooltip,
    EditText,
    DoneText,

    // dialog buttons
    OkText,
    YesText,
    NoText,
    CancelText,

    // messages
    NoDataLoadedInPlaceholder,
    LoadedData,
    SaveUnsavedWorkTitle,
    SaveUnsavedWork,
    InvalidTextErrorTitle,
    InvalidTextErrorMessage,
    DuplicateErrorTitle,
    DuplicateErrorMessage,
    LoadErrorTitle,
    LoadErrorMessage,
    SaveErrorTitle,
    SaveErrorMessage,
    ScreenshotErrorTitle,
    ScreenshotErrorMessage,
    SelectionErrorTitle,
    SelectionErrorMessage,
    SessionErrorTitle,
    SessionErrorMessage,

    // files
    DataFileExt,
    DataFileExtDesc,
    ScrnshtInitial,
    ScrnshtFileExt,
    ScrnshtFileDesc,
}

impl PropertyKey {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Text lookup by `PropertyKey`, missing keys fall back to the key itself.
pub trait PropertyText {
    fn text(&self, key: PropertyKey) -> &str;
}

impl<L: StringLookup> PropertyText for L {
    fn text(&self, key: PropertyKey) -> &str {
        self.get_or_key(key.as_str())
    }
}

/// The built-in properties, overridden by the file named in the config.
pub fn load_properties(config: &Config) -> Result<Properties, String> {
    let mut properties = Properties::parse(DEFAULT_PROPERTIES)
        .map_err(|err| format!("invalid built-in properties: {err}"))?;
    if let Some(path) = &config.properties_path {
        log::debug!("loading properties from {:?}", path);
        properties.merge(Properties::from_path(path)?);
    }
    Ok(properties)
}

/// The catalog file named in the config, or the built-in catalog.
pub fn load_catalog(config: &Config) -> Result<Catalog, CatalogError> {
    match &config.algorithms_path {
        Some(path) => {
            log::debug!("loading algorithm catalog from {:?}", path);
            Catalog::from_path(path)
        }
        None => Catalog::from_json(DEFAULT_CATALOG),
    }
}
