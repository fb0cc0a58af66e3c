use serde::Deserialize;

/// Values accepted from `loadr.toml` / `loadr.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub rate: Option<f64>,
    pub max: Option<i64>,
    pub url: Option<String>,
    #[serde(alias = "type")]
    pub method: Option<String>,
    pub json: Option<String>,
    pub token: Option<String>,
    pub status: Option<u16>,
    pub reports_dir: Option<String>,
}
