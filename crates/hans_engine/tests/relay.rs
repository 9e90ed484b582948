use std::collections::BTreeMap;
use std::time::Duration;

use hans_core::Submission;
use hans_engine::{
    relay_message, ClickCounter, Relay, RelayCommand, RelayOutcome, RelaySettings, SOLO_MESSAGE,
};
use tokio::net::UdpSocket;

#[test]
fn message_folds_value_into_id() {
    assert_eq!(relay_message(&Submission::new("ds")), "ds");
    assert_eq!(
        relay_message(&Submission::with_value("es.reverb", "on")),
        "es.reverb.on"
    );
}

#[test]
fn service_commands_are_recognised() {
    assert_eq!(RelayCommand::parse("StartServer"), RelayCommand::StartServer);
    assert_eq!(RelayCommand::parse("poweroff"), RelayCommand::Poweroff);
    assert_eq!(RelayCommand::parse("reboot").script_name(), Some("reboot"));
    // Exact match only.
    assert_eq!(
        RelayCommand::parse("StartServer.on"),
        RelayCommand::Forward("StartServer.on".to_string())
    );
    assert_eq!(RelayCommand::parse("DK12").script_name(), None);
}

#[tokio::test]
async fn forwards_plain_messages_over_udp() {
    let drum = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let settings = RelaySettings {
        drum_addr: drum.local_addr().unwrap(),
        ..RelaySettings::default()
    };
    let relay = Relay::bind(settings).await.unwrap();

    let outcome = relay
        .handle(&Submission::with_value("ec.delay-param", "0.25"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        RelayOutcome::Forwarded {
            message: "ec.delay-param.0.25".to_string()
        }
    );

    let mut buf = [0u8; 64];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), drum.recv_from(&mut buf))
        .await
        .expect("datagram arrives")
        .unwrap();
    assert_eq!(&buf[..len], b"ec.delay-param.0.25");
}

#[tokio::test]
async fn unconfigured_service_command_is_skipped() {
    let relay = Relay::bind(RelaySettings::default()).await.unwrap();
    let outcome = relay.handle(&Submission::new("reboot")).await.unwrap();
    assert_eq!(
        outcome,
        RelayOutcome::Unconfigured {
            command: "reboot".to_string()
        }
    );
}

#[cfg(unix)]
#[tokio::test]
async fn configured_service_command_is_launched() {
    let mut scripts = BTreeMap::new();
    scripts.insert("StartServer".to_string(), vec!["true".to_string()]);
    let relay = Relay::bind(RelaySettings {
        scripts,
        ..RelaySettings::default()
    })
    .await
    .unwrap();

    let outcome = relay.handle(&Submission::new("StartServer")).await.unwrap();
    assert_eq!(
        outcome,
        RelayOutcome::Launched {
            command: "StartServer".to_string()
        }
    );
}

#[test]
fn click_counter_fires_on_limit_and_grows_on_request() {
    let mut counter = ClickCounter::new(3);
    assert!(!counter.register(true));
    assert!(!counter.register(true));
    assert!(counter.register(false));
    assert_eq!((counter.clicks(), counter.limit()), (0, 3));

    for _ in 0..2 {
        assert!(!counter.register(false));
    }
    assert!(counter.register(true));
    assert_eq!(counter.limit(), 4);

    assert!(ClickCounter::new(0).register(false));
}

#[tokio::test]
async fn every_nth_solo_click_sends_solo() {
    let drum = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let relay = Relay::bind(RelaySettings {
        drum_addr: drum.local_addr().unwrap(),
        solo_click_limit: 3,
        solo_limit_growth: 0.0,
        ..RelaySettings::default()
    })
    .await
    .unwrap();
    let click = Submission::new("hanssolo");

    for expected in 1..=2 {
        assert_eq!(
            relay.handle(&click).await.unwrap(),
            RelayOutcome::SoloCounted {
                clicks: expected,
                limit: 3
            }
        );
    }
    assert_eq!(
        relay.handle(&click).await.unwrap(),
        RelayOutcome::SoloFired { next_limit: 3 }
    );

    let mut buf = [0u8; 16];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), drum.recv_from(&mut buf))
        .await
        .expect("datagram arrives")
        .unwrap();
    assert_eq!(&buf[..len], SOLO_MESSAGE.as_bytes());

    // The count starts over after a solo.
    assert_eq!(
        relay.handle(&click).await.unwrap(),
        RelayOutcome::SoloCounted {
            clicks: 1,
            limit: 3
        }
    );
}
