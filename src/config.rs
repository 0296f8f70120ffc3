use crate::layout::ArrowStyle;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// KEGG module classes keyed by the one-letter category used for coloring.
static DEFAULT_KEGG_CATEGORIES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    [
        ("A", "Amino acid metabolism"),
        ("B", "Biosynthesis of other secondary metabolites"),
        ("C", "Carbohydrate metabolism"),
        ("E", "Energy metabolism"),
        ("G", "Glycan metabolism"),
        ("L", "Lipid metabolism"),
        ("M", "Metabolism of cofactors and vitamins"),
        ("N", "Nucleotide metabolism"),
        ("T", "Biosynthesis of terpenoids and polyketides"),
        ("X", "Xenobiotics biodegradation"),
    ]
    .into_iter()
    .map(|(key, class)| (key.to_string(), class.to_string()))
    .collect()
});

pub fn default_kegg_categories() -> BTreeMap<String, String> {
    DEFAULT_KEGG_CATEGORIES.clone()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Vertical distance between two genome rows.
    pub genome_spacing: f32,
    /// Cosmetic padding added below the last genome row.
    pub additional_spacing: f32,
    pub arrow_style: ArrowStyle,
    pub kegg_categories: BTreeMap<String, String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            genome_spacing: 50.0,
            additional_spacing: 100.0,
            arrow_style: ArrowStyle::Default,
            kegg_categories: default_kegg_categories(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    genome_spacing: Option<f32>,
    additional_spacing: Option<f32>,
    arrow_style: Option<ArrowStyleSetting>,
    kegg_categories: Option<BTreeMap<String, String>>,
}

/// Arrow style as written in a config file: either the settings-panel code
/// (`3`) or the style name (`"pentagon"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArrowStyleSetting {
    Code(u8),
    Named(ArrowStyle),
}

impl ArrowStyleSetting {
    fn resolve(self) -> anyhow::Result<ArrowStyle> {
        match self {
            Self::Named(style) => Ok(style),
            Self::Code(code) => ArrowStyle::from_code(code)
                .ok_or_else(|| anyhow::anyhow!("Unknown arrow style code {}", code)),
        }
    }
}

fn parse_config_file(contents: &str) -> anyhow::Result<ConfigFile> {
    match serde_json::from_str::<ConfigFile>(contents) {
        Ok(parsed) => Ok(parsed),
        Err(json_err) => json5::from_str::<ConfigFile>(contents).map_err(|json5_err| {
            anyhow::anyhow!("Invalid config file: {json_err} (as JSON5: {json5_err})")
        }),
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<ViewConfig> {
    let mut config = ViewConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed = parse_config_file(&contents)?;
    apply_config_file(&mut config, parsed)?;
    log::info!("loaded view config from {}", path.display());
    Ok(config)
}

fn apply_config_file(config: &mut ViewConfig, parsed: ConfigFile) -> anyhow::Result<()> {
    if let Some(v) = parsed.genome_spacing {
        config.genome_spacing = v;
    }
    if let Some(v) = parsed.additional_spacing {
        config.additional_spacing = v;
    }
    if let Some(v) = parsed.arrow_style {
        config.arrow_style = v.resolve()?;
    }
    if let Some(v) = parsed.kegg_categories {
        config.kegg_categories = v;
    }
    Ok(())
}
