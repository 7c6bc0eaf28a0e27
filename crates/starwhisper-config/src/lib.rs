use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 3] = ["STARWHISPER_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Key baked in at build time, used when no variable is set at runtime.
const BUILD_API_KEY: Option<&str> = option_env!("API_KEY");

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub flash_model: Option<String>,
    pub pro_model: Option<String>,
    pub chart_size: f64,
    pub output_dir: PathBuf,
    pub muted: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StarwhisperToml {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    flash_model: Option<String>,
    #[serde(default)]
    pro_model: Option<String>,
    #[serde(default = "default_chart_size")]
    chart_size: f64,
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,
    #[serde(default)]
    muted: bool,
}

fn default_chart_size() -> f64 {
    320.0
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Resolve the API key through `lookup` (normally `std::env::var`), falling
/// back to the build-time key.
pub fn resolve_api_key<F>(lookup: F) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .or_else(|| BUILD_API_KEY.map(str::to_string))
        .ok_or_else(|| anyhow::anyhow!("No API key found. Set one of {:?}", API_KEY_VARS))
}

/// Try common relative paths for `configs/starwhisper.toml`. The file is
/// optional, so a miss is `None` rather than an error.
pub fn read_config_toml_text() -> Option<String> {
    let paths = ["configs/starwhisper.toml", "../../configs/starwhisper.toml"];
    paths.iter().find_map(|p| fs::read_to_string(p).ok())
}

/// Build settings from an already-resolved key and optional TOML text.
pub fn parse_settings(api_key: String, toml_text: Option<&str>) -> anyhow::Result<Settings> {
    let file = match toml_text {
        Some(text) => toml::from_str::<StarwhisperToml>(text)
            .map_err(|e| anyhow::anyhow!("Failed to parse starwhisper.toml: {e}"))?,
        None => StarwhisperToml {
            chart_size: default_chart_size(),
            output_dir: default_output_dir(),
            ..StarwhisperToml::default()
        },
    };

    if !(file.chart_size.is_finite() && file.chart_size >= 200.0) {
        anyhow::bail!(
            "chart_size must be at least 200 to fit the zodiac bands, got {}",
            file.chart_size
        );
    }

    Ok(Settings {
        api_key,
        base_url: file.base_url,
        flash_model: file.flash_model,
        pro_model: file.pro_model,
        chart_size: file.chart_size,
        output_dir: file.output_dir,
        muted: file.muted,
    })
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let api_key = resolve_api_key(|var| env::var(var).ok())?;
    parse_settings(api_key, read_config_toml_text().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn first_set_variable_wins() {
        let lookup = lookup_from(&[("API_KEY", "c"), ("GEMINI_API_KEY", "b")]);
        assert_eq!(resolve_api_key(lookup).unwrap(), "b");
    }

    #[test]
    fn blank_variable_is_skipped() {
        let lookup = lookup_from(&[("STARWHISPER_API_KEY", "  "), ("API_KEY", "c")]);
        assert_eq!(resolve_api_key(lookup).unwrap(), "c");
    }

    #[test]
    fn missing_key_is_an_error_without_build_key() {
        let result = resolve_api_key(|_| None);
        match BUILD_API_KEY {
            Some(key) => assert_eq!(result.unwrap(), key),
            None => assert!(result.is_err()),
        }
    }

    #[test]
    fn defaults_without_file() {
        let settings = parse_settings("k".into(), None).unwrap();
        assert_eq!(settings.chart_size, 320.0);
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert!(!settings.muted);
        assert!(settings.flash_model.is_none());
    }

    #[test]
    fn file_overrides() {
        let text = r#"
            base_url = "http://localhost:8080/v1beta"
            pro_model = "gemini-2.5-pro"
            chart_size = 480
            output_dir = "charts"
            muted = true
        "#;
        let settings = parse_settings("k".into(), Some(text)).unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:8080/v1beta"));
        assert_eq!(settings.pro_model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(settings.chart_size, 480.0);
        assert_eq!(settings.output_dir, PathBuf::from("charts"));
        assert!(settings.muted);
    }

    #[test]
    fn rejects_tiny_chart_and_unknown_keys() {
        assert!(parse_settings("k".into(), Some("chart_size = 50")).is_err());
        assert!(parse_settings("k".into(), Some("colour = \"red\"")).is_err());
    }
}
