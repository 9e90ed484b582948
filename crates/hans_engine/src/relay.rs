use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Mutex;

use engine_logging::{engine_info, engine_warn};
use hans_core::Submission;
use tokio::net::UdpSocket;

use crate::RelayError;

/// Datagram sent to the drum server when the solo button has been hammered enough.
pub const SOLO_MESSAGE: &str = "solo";

#[derive(Debug, Clone, PartialEq)]
pub struct RelaySettings {
    /// UDP address of the drum/sound server.
    pub drum_addr: SocketAddr,
    /// argv per service command name, e.g. `"StartServer" => ["screen", "-d", ...]`.
    pub scripts: BTreeMap<String, Vec<String>>,
    /// Button id counted towards the solo trigger instead of being forwarded.
    pub solo_trigger: String,
    /// Clicks needed for the first solo.
    pub solo_click_limit: u32,
    /// Chance in `[0, 1]` that the limit grows by one after each solo.
    pub solo_limit_growth: f64,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            drum_addr: SocketAddr::from(([127, 0, 0, 1], 9998)),
            scripts: BTreeMap::new(),
            solo_trigger: "hanssolo".to_string(),
            solo_click_limit: 5,
            solo_limit_growth: 0.8,
        }
    }
}

/// Counts solo clicks; fires every `limit` clicks, then maybe raises the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickCounter {
    clicks: u32,
    limit: u32,
}

impl ClickCounter {
    /// A zero limit behaves like one.
    pub fn new(limit: u32) -> Self {
        Self {
            clicks: 0,
            limit: limit.max(1),
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Records one click. Returns `true` when the limit is reached; the count
    /// then resets and the limit grows by one if `grow` is set.
    pub fn register(&mut self, grow: bool) -> bool {
        self.clicks += 1;
        if self.clicks < self.limit {
            return false;
        }
        self.clicks = 0;
        if grow {
            self.limit = self.limit.saturating_add(1);
        }
        true
    }
}

/// What a relay message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayCommand {
    StartServer,
    KillServer,
    StartJacktrip,
    ConnectJacktrip,
    Reboot,
    Poweroff,
    Forward(String),
}

impl RelayCommand {
    pub fn parse(message: &str) -> Self {
        match message {
            "StartServer" => RelayCommand::StartServer,
            "KillServer" => RelayCommand::KillServer,
            "StartJacktrip" => RelayCommand::StartJacktrip,
            "ConnectJacktrip" => RelayCommand::ConnectJacktrip,
            "reboot" => RelayCommand::Reboot,
            "poweroff" => RelayCommand::Poweroff,
            other => RelayCommand::Forward(other.to_string()),
        }
    }

    /// Key into [`RelaySettings::scripts`]; `None` for forwarded messages.
    pub fn script_name(&self) -> Option<&'static str> {
        match self {
            RelayCommand::StartServer => Some("StartServer"),
            RelayCommand::KillServer => Some("KillServer"),
            RelayCommand::StartJacktrip => Some("StartJacktrip"),
            RelayCommand::ConnectJacktrip => Some("ConnectJacktrip"),
            RelayCommand::Reboot => Some("reboot"),
            RelayCommand::Poweroff => Some("poweroff"),
            RelayCommand::Forward(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Forwarded { message: String },
    Launched { command: String },
    Unconfigured { command: String },
    SoloCounted { clicks: u32, limit: u32 },
    SoloFired { next_limit: u32 },
}

/// `id` alone, or `id.value` when a value was submitted.
pub fn relay_message(submission: &Submission) -> String {
    match submission.value.as_deref() {
        Some(value) => format!("{}.{}", submission.id, value),
        None => submission.id.clone(),
    }
}

pub struct Relay {
    settings: RelaySettings,
    socket: UdpSocket,
    solo: Mutex<ClickCounter>,
}

impl Relay {
    pub async fn bind(settings: RelaySettings) -> Result<Self, RelayError> {
        let local: SocketAddr = if settings.drum_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let socket = UdpSocket::bind(local).await?;
        let solo = Mutex::new(ClickCounter::new(settings.solo_click_limit));
        Ok(Self {
            settings,
            socket,
            solo,
        })
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    pub async fn handle(&self, submission: &Submission) -> Result<RelayOutcome, RelayError> {
        if submission.id == self.settings.solo_trigger {
            return self.count_solo().await;
        }
        let message = relay_message(submission);
        let command = RelayCommand::parse(&message);
        match command.script_name() {
            Some(name) => self.launch(name),
            None => {
                self.socket
                    .send_to(message.as_bytes(), self.settings.drum_addr)
                    .await?;
                Ok(RelayOutcome::Forwarded { message })
            }
        }
    }

    async fn count_solo(&self) -> Result<RelayOutcome, RelayError> {
        let grow = rand::random::<f64>() < self.settings.solo_limit_growth;
        let (fired, clicks, limit) = {
            let mut counter = self.solo.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let fired = counter.register(grow);
            (fired, counter.clicks(), counter.limit())
        };
        if !fired {
            return Ok(RelayOutcome::SoloCounted { clicks, limit });
        }

        self.socket
            .send_to(SOLO_MESSAGE.as_bytes(), self.settings.drum_addr)
            .await?;
        engine_info!("Solo fired; next after {} clicks", limit);
        Ok(RelayOutcome::SoloFired { next_limit: limit })
    }

    /// Spawns the configured argv detached; its exit status is not awaited.
    fn launch(&self, name: &str) -> Result<RelayOutcome, RelayError> {
        let Some((program, args)) = self
            .settings
            .scripts
            .get(name)
            .and_then(|argv| argv.split_first())
        else {
            engine_warn!("No script configured for {}", name);
            return Ok(RelayOutcome::Unconfigured {
                command: name.to_string(),
            });
        };

        tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(false)
            .spawn()
            .map_err(|source| RelayError::Launch {
                command: name.to_string(),
                source,
            })?;
        engine_info!("Launched {} via {}", name, program);
        Ok(RelayOutcome::Launched {
            command: name.to_string(),
        })
    }
}
