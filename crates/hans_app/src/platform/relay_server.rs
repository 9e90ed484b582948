use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use engine_logging::{engine_debug, engine_info, engine_warn};
use hans_engine::{decode_submission, Relay, RelayOutcome};

use super::config::RelayConfig;

pub fn run_relay(config: RelayConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build relay runtime")?;
    runtime.block_on(serve(config))
}

async fn serve(config: RelayConfig) -> anyhow::Result<()> {
    let relay = Relay::bind(config.relay_settings())
        .await
        .context("bind relay socket")?;
    let app = router(Arc::new(relay));

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("listen on {}", config.listen))?;
    engine_info!(
        "Relay listening on http://{} forwarding to udp://{}",
        config.listen,
        config.drum_addr
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("relay server")?;
    engine_info!("Relay stopped");
    Ok(())
}

pub(crate) fn router(relay: Arc<Relay>) -> Router {
    Router::new()
        .route("/", get(status_handler).post(submit_handler))
        .with_state(relay)
}

async fn status_handler(State(relay): State<Arc<Relay>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        format!("HANS relay -> udp://{}\n", relay.settings().drum_addr),
    )
}

/// Accepts the panel form post. The panel never reads the reply, so delivery
/// problems are logged and the request still succeeds.
async fn submit_handler(State(relay): State<Arc<Relay>>, body: Bytes) -> StatusCode {
    let submission = match decode_submission(&body) {
        Ok(submission) => submission,
        Err(err) => {
            engine_warn!("Rejected submission: {}", err);
            return StatusCode::BAD_REQUEST;
        }
    };

    match relay.handle(&submission).await {
        Ok(RelayOutcome::Forwarded { message }) => engine_debug!("Forwarded {:?}", message),
        Ok(RelayOutcome::Launched { command }) => engine_info!("Ran service command {}", command),
        Ok(RelayOutcome::Unconfigured { command }) => {
            engine_debug!("Service command {} has no script", command)
        }
        Ok(RelayOutcome::SoloCounted { clicks, limit }) => {
            engine_debug!("Solo click {}/{}", clicks, limit)
        }
        Ok(RelayOutcome::SoloFired { next_limit }) => {
            engine_debug!("Solo sent, next limit {}", next_limit)
        }
        Err(err) => engine_warn!("Relay of {:?} failed: {}", submission.id, err),
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hans_engine::RelaySettings;
    use tokio::net::UdpSocket;

    use super::*;

    #[tokio::test]
    async fn form_post_is_forwarded_and_acknowledged() {
        let drum = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let relay = Relay::bind(RelaySettings {
            drum_addr: drum.local_addr().unwrap(),
            ..RelaySettings::default()
        })
        .await
        .unwrap();
        let relay = Arc::new(relay);

        let status = submit_handler(
            State(relay.clone()),
            Bytes::from_static(b"id=es.reverb&value=on"),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let mut buf = [0u8; 32];
        let (len, _) = tokio::time::timeout(Duration::from_secs(2), drum.recv_from(&mut buf))
            .await
            .expect("datagram arrives")
            .unwrap();
        assert_eq!(&buf[..len], b"es.reverb.on");

        let status = submit_handler(State(relay), Bytes::from_static(b"value=on")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
