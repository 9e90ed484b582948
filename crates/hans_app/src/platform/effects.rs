use std::sync::Arc;
use std::time::Duration;

use engine_logging::engine_debug;
use hans_core::Effect;
use hans_engine::{EngineHandle, Submitter};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(submitter: Arc<dyn Submitter>) -> std::io::Result<Self> {
        let engine = EngineHandle::new(submitter, SHUTDOWN_GRACE)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit(submission) => {
                    engine_debug!(
                        "Submit id={} value={:?}",
                        submission.id,
                        submission.value
                    );
                    self.engine.submit(submission);
                }
            }
        }
    }

    /// Gives in-flight submissions a short grace period, then stops.
    pub fn shutdown(self) {
        self.engine.shutdown();
    }
}
