use super::{apply_config, load_config_file, types::ConfigFile};
use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use crate::args::LoadArgs;

fn parse_with_matches(argv: &[&str]) -> Result<(LoadArgs, clap::ArgMatches), String> {
    let matches = LoadArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = LoadArgs::from_arg_matches(&matches).map_err(|err| format!("{}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("loadr.toml");
    let content = r#"
url = "http://localhost:3000/health"
method = "post"
rate = 2.5
max = 12
json = "payload.json"
token = "abc"
status = 201
reports_dir = "out"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.url.as_deref() != Some("http://localhost:3000/health") {
        return Err("Unexpected url".to_owned());
    }
    if config.method.as_deref() != Some("post") {
        return Err("Unexpected method".to_owned());
    }
    if config.max != Some(12) {
        return Err("Unexpected max".to_owned());
    }
    if config.status != Some(201) {
        return Err("Unexpected status".to_owned());
    }
    if config.reports_dir.as_deref() != Some("out") {
        return Err("Unexpected reports_dir".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_with_type_alias() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("loadr.json");
    let content = r#"{ "url": "http://localhost", "type": "put", "max": 3 }"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.method.as_deref() != Some("put") {
        return Err("Expected 'type' alias to populate method".to_owned());
    }
    if config.max != Some(3) {
        return Err("Unexpected max".to_owned());
    }
    Ok(())
}

#[test]
fn rejects_unknown_extension() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("loadr.yaml");
    std::fs::write(&path, "url: x").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected unsupported extension error".to_owned());
    }
    Ok(())
}

#[test]
fn rejects_unknown_keys() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("loadr.toml");
    std::fs::write(&path, "concurrency = 4\n").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected unknown key to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn cli_values_override_config() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["loadr", "--url", "http://cli.local", "-m", "4"])?;
    let config = ConfigFile {
        url: Some("http://config.local".to_owned()),
        max: Some(99),
        rate: Some(1.5),
        token: Some("from-config".to_owned()),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, config);

    if args.url != "http://cli.local" {
        return Err(format!("CLI url should win, got {}", args.url));
    }
    if args.max_requests != 4 {
        return Err(format!("CLI max should win, got {}", args.max_requests));
    }
    if std::env::var_os("LOADR_RATE").is_none() && !(args.rate > 1.49 && args.rate < 1.51) {
        return Err(format!("Config rate should apply, got {}", args.rate));
    }
    if std::env::var_os("LOADR_TOKEN").is_none()
        && args.bearer_token.as_deref() != Some("from-config")
    {
        return Err("Config token should apply".to_owned());
    }
    Ok(())
}
