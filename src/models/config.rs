use crate::assets::AssetLoader;
use crate::error::AppError;
use cmyk_grid::{Bounds, Channel, FontFit, GridSpec, SourceColor};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Grid layout and color variation
    #[serde(default)]
    pub grid: GridConfig,

    /// The selected object to duplicate (absent means nothing is selected)
    #[serde(default)]
    pub origin: Option<OriginConfig>,

    /// Label font settings
    #[serde(default)]
    pub label: LabelConfig,

    /// SVG/PNG output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Grid parameters as entered by the user, before validation.
///
/// Counts are signed so that negative values in a config file surface as an
/// invalid grid rather than a YAML type error.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_count")]
    pub columns: i64,

    #[serde(default = "default_count")]
    pub rows: i64,

    #[serde(default = "default_spacing")]
    pub spacing: f32,

    /// Whether to sweep `channel` across the grid
    #[serde(default)]
    pub variation: bool,

    /// Channel swept when `variation` is on
    #[serde(default = "default_channel")]
    pub channel: Channel,
}

fn default_count() -> i64 {
    5
}

fn default_spacing() -> f32 {
    10.0
}

fn default_channel() -> Channel {
    Channel::Cyan
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_count(),
            rows: default_count(),
            spacing: default_spacing(),
            variation: false,
            channel: default_channel(),
        }
    }
}

/// Geometry and fill of the origin object
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OriginConfig {
    #[serde(default)]
    pub x: f32,

    #[serde(default)]
    pub y: f32,

    pub width: f32,

    pub height: f32,

    /// Fill in text form, see [`SourceColor`]'s `FromStr`
    pub fill: String,
}

impl OriginConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn source_color(&self) -> Result<SourceColor, AppError> {
        Ok(self.fill.parse::<SourceColor>()?)
    }
}

/// Label font settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LabelConfig {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_start_size")]
    pub start_size: f32,

    #[serde(default = "default_min_size")]
    pub min_size: f32,

    #[serde(default = "default_step")]
    pub step: f32,
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_start_size() -> f32 {
    12.0
}

fn default_min_size() -> f32 {
    4.0
}

fn default_step() -> f32 {
    0.5
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            start_size: default_start_size(),
            min_size: default_min_size(),
            step: default_step(),
        }
    }
}

impl LabelConfig {
    pub fn font_fit(&self) -> FontFit {
        FontFit::new(self.start_size, self.min_size, self.step)
    }
}

/// SVG/PNG output settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Border around the drawing, in document units
    #[serde(default = "default_margin")]
    pub margin: f32,

    /// PNG pixels per document unit
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_margin() -> f32 {
    10.0
}

fn default_scale() -> f32 {
    2.0
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            scale: default_scale(),
        }
    }
}

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GridOverrides {
    pub columns: Option<u32>,
    pub rows: Option<u32>,
    pub spacing: Option<f32>,
    /// Enable variation on this channel
    pub vary: Option<Channel>,
    /// Force variation off
    pub no_vary: bool,
    pub fill: Option<SourceColor>,
    /// Origin width and height
    pub size: Option<(f32, f32)>,
    pub scale: Option<f32>,
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from AssetLoader (external file or embedded default)
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, AppError> {
        let content = loader.read_config_string()?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            columns = config.grid.columns,
            rows = config.grid.rows,
            has_origin = config.origin.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Apply command-line overrides.
    ///
    /// Overriding the fill or size without an origin in the config creates
    /// one at `(0, 0)`; a fill alone defaults to a 50x30 object.
    pub fn apply_overrides(&mut self, overrides: &GridOverrides) {
        if let Some(columns) = overrides.columns {
            self.grid.columns = columns as i64;
        }
        if let Some(rows) = overrides.rows {
            self.grid.rows = rows as i64;
        }
        if let Some(spacing) = overrides.spacing {
            self.grid.spacing = spacing;
        }
        if let Some(channel) = overrides.vary {
            self.grid.variation = true;
            self.grid.channel = channel;
        }
        if overrides.no_vary {
            self.grid.variation = false;
        }
        if let Some(scale) = overrides.scale {
            self.output.scale = scale;
        }

        if overrides.fill.is_none() && overrides.size.is_none() {
            return;
        }

        let origin = self.origin.get_or_insert_with(|| OriginConfig {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 30.0,
            fill: SourceColor::Cmyk(cmyk_grid::Cmyk::BLACK).to_string(),
        });
        if let Some(fill) = &overrides.fill {
            origin.fill = fill.to_string();
        }
        if let Some((width, height)) = overrides.size {
            origin.width = width;
            origin.height = height;
        }
    }

    /// Validate the grid section into a [`GridSpec`].
    ///
    /// Negative counts are reported as zero.
    pub fn grid_spec(&self) -> Result<GridSpec, AppError> {
        let columns = u32::try_from(self.grid.columns).unwrap_or(0);
        let rows = u32::try_from(self.grid.rows).unwrap_or(0);
        let spec = GridSpec::new(columns, rows, self.grid.spacing)?;

        Ok(if self.grid.variation {
            spec.with_variation(self.grid.channel)
        } else {
            spec
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            origin: None,
            label: LabelConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Parse a `WIDTHxHEIGHT` size such as `50x30`.
pub fn parse_size(s: &str) -> Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width: f32 = w.trim().parse().map_err(|_| format!("invalid width {w:?}"))?;
    let height: f32 = h.trim().parse().map_err(|_| format!("invalid height {h:?}"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("size must be positive, got {s:?}"));
    }
    Ok((width, height))
}
