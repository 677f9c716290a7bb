use crate::commands::{CmdMessage, CmdResult, Table};
use crate::config::{mask_secret, ConfigKey, TrelloConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Path,
    Set(ConfigKey, String),
    Unset(ConfigKey),
}

pub fn run(path: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::Show => {
            let config = TrelloConfig::load(path)?;
            Ok(CmdResult::default().with_table(config_table(&config, path)))
        }
        ConfigAction::Path => {
            Ok(CmdResult::default().with_message(CmdMessage::info(path.display().to_string())))
        }
        ConfigAction::Set(key, value) => {
            let mut config = TrelloConfig::load(path)?;
            config.set(key, &value)?;
            config.save(path)?;
            let shown = display_value(&config, key);
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("{} set to {}", key, shown))))
        }
        ConfigAction::Unset(key) => {
            let mut config = TrelloConfig::load(path)?;
            config.unset(key);
            config.save(path)?;
            Ok(CmdResult::default().with_message(CmdMessage::success(format!("{} unset", key))))
        }
    }
}

fn display_value(config: &TrelloConfig, key: ConfigKey) -> String {
    match config.get(key) {
        Some(value) if key.is_secret() => mask_secret(&value),
        Some(value) => value,
        None => "(not set)".to_string(),
    }
}

fn config_table(config: &TrelloConfig, path: &Path) -> Table {
    let mut table = Table::new(
        format!("Configuration ({})", path.display()),
        "settings",
        &["Key", "Value"],
    );
    for key in ConfigKey::ALL {
        table.push_row(vec![key.to_string(), display_value(config, key)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn show_masks_secrets() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        run(
            &path,
            ConfigAction::Set(ConfigKey::Token, "supersecrettoken".into()),
        )
        .unwrap();

        let table = run(&path, ConfigAction::Show).unwrap().table.unwrap();
        let token_row = table.rows.iter().find(|r| r[0] == "token").unwrap();
        assert_eq!(token_row[1], "************oken");
        let key_row = table.rows.iter().find(|r| r[0] == "api-key").unwrap();
        assert_eq!(key_row[1], "(not set)");
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let result = run(
            &path,
            ConfigAction::Set(ConfigKey::BaseUrl, "http://localhost:9/1".into()),
        )
        .unwrap();
        assert_eq!(
            result.messages[0].content,
            "base-url set to http://localhost:9/1"
        );
        assert_eq!(
            TrelloConfig::load(&path).unwrap().base_url,
            "http://localhost:9/1"
        );
    }

    #[test]
    fn unset_restores_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        run(&path, ConfigAction::Set(ConfigKey::Timeout, "3".into())).unwrap();
        run(&path, ConfigAction::Unset(ConfigKey::Timeout)).unwrap();

        assert_eq!(TrelloConfig::load(&path).unwrap().timeout_secs, 30);
    }

    #[test]
    fn invalid_value_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(run(&path, ConfigAction::Set(ConfigKey::Timeout, "later".into())).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn path_reports_location() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let result = run(&path, ConfigAction::Path).unwrap();
        assert_eq!(result.messages[0].content, path.display().to_string());
    }
}
