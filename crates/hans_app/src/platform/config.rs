use std::collections::BTreeMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use engine_logging::engine_info;
use hans_engine::RelaySettings;
use serde::{Deserialize, Serialize};

/// Relay configuration as read from RON. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub listen: SocketAddr,
    pub drum_addr: SocketAddr,
    /// argv per service command (`StartServer`, `KillServer`, `StartJacktrip`,
    /// `ConnectJacktrip`, `reboot`, `poweroff`).
    pub scripts: BTreeMap<String, Vec<String>>,
    /// Button id whose clicks count towards a `solo` datagram.
    pub solo_trigger: String,
    /// Clicks needed for the first solo.
    pub solo_click_limit: u32,
    /// Chance that the click limit grows by one after each solo.
    pub solo_limit_growth: f64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        let relay = RelaySettings::default();
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8000)),
            drum_addr: relay.drum_addr,
            scripts: relay.scripts,
            solo_trigger: relay.solo_trigger,
            solo_click_limit: relay.solo_click_limit,
            solo_limit_growth: relay.solo_limit_growth,
        }
    }
}

impl RelayConfig {
    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            drum_addr: self.drum_addr,
            scripts: self.scripts.clone(),
            solo_trigger: self.solo_trigger.clone(),
            solo_click_limit: self.solo_click_limit,
            solo_limit_growth: self.solo_limit_growth.clamp(0.0, 1.0),
        }
    }
}

pub fn load_relay_config(path: Option<&Path>) -> anyhow::Result<RelayConfig> {
    let Some(path) = path else {
        return Ok(RelayConfig::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: RelayConfig =
        ron::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
    engine_info!("Loaded relay config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_uses_defaults() {
        let config = load_relay_config(None).unwrap();
        assert_eq!(config.listen.port(), 8000);
        assert_eq!(config.drum_addr, "127.0.0.1:9998".parse().unwrap());
        assert!(config.scripts.is_empty());
        assert_eq!(config.solo_trigger, "hanssolo");
        assert_eq!(config.solo_click_limit, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                drum_addr: "10.0.0.2:9998",
                solo_click_limit: 3,
                scripts: {{ "KillServer": ["screen", "-S", "DRUMSERVER", "-X", "quit"] }},
            )"#
        )
        .unwrap();

        let config = load_relay_config(Some(file.path())).unwrap();
        assert_eq!(config.listen.port(), 8000);
        let settings = config.relay_settings();
        assert_eq!(settings.drum_addr, "10.0.0.2:9998".parse().unwrap());
        assert_eq!(settings.scripts["KillServer"][0], "screen");
        assert_eq!(settings.solo_click_limit, 3);
        assert_eq!(settings.solo_limit_growth, 0.8);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(listen: 12").unwrap();
        assert!(load_relay_config(Some(file.path())).is_err());
    }
}
