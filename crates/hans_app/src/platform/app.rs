use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use engine_logging::{engine_info, engine_warn};
use hans_core::{update, Msg, PanelState};
use hans_engine::{ReqwestSubmitter, SubmitSettings};

use super::effects::EffectRunner;
use super::input::{parse_input, Input, HELP};
use super::{layout, render};

pub fn run_panel(layout_arg: &str, endpoint: String) -> anyhow::Result<()> {
    let layout = layout::resolve_layout(layout_arg)?;
    let settings = SubmitSettings {
        endpoint,
        ..SubmitSettings::default()
    };
    let submitter = ReqwestSubmitter::new(&settings)
        .with_context(|| format!("invalid endpoint {:?}", settings.endpoint))?;
    engine_info!("Panel {:?} posting to {}", layout.title, submitter.target());
    let runner = EffectRunner::new(Arc::new(submitter)).context("start submission engine")?;

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_input(&line) {
                Ok(Some(input)) => {
                    if input_tx.send(input).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
    });

    eprintln!("{HELP}");
    let mut app = PanelApp::new(PanelState::from_layout(layout), runner, io::stdout());
    app.render_if_dirty()?;
    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Msg(msg) => app.dispatch(msg)?,
            Input::Show => app.render()?,
            Input::Quit => break,
        }
    }
    app.finish();
    Ok(())
}

/// Single owner of the panel state; every interaction goes through `dispatch`.
pub(crate) struct PanelApp<W: Write> {
    state: PanelState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> PanelApp<W> {
    pub(crate) fn new(state: PanelState, runner: EffectRunner, out: W) -> Self {
        Self { state, runner, out }
    }

    pub(crate) fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            self.runner.enqueue(effects);
        }
        self.render_if_dirty()
    }

    pub(crate) fn render_if_dirty(&mut self) -> io::Result<()> {
        if self.state.consume_dirty() {
            self.render()?;
        }
        Ok(())
    }

    pub(crate) fn render(&mut self) -> io::Result<()> {
        self.out
            .write_all(render::render(&self.state.view()).as_bytes())?;
        self.out.flush()
    }

    pub(crate) fn finish(self) {
        let submissions = self.state.submissions();
        if submissions > 0 {
            engine_info!("Panel closing after {} submissions", submissions);
        } else {
            engine_warn!("Panel closing without any submissions");
        }
        self.runner.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use hans_core::{PanelLayout, Submission};
    use hans_engine::{SubmitError, Submitter};

    use super::*;

    #[derive(Default)]
    struct RecordingSubmitter {
        seen: Mutex<Vec<Submission>>,
    }

    #[async_trait::async_trait]
    impl Submitter for RecordingSubmitter {
        async fn submit(&self, submission: &Submission) -> Result<u16, SubmitError> {
            self.seen.lock().unwrap().push(submission.clone());
            Ok(200)
        }
    }

    #[test]
    fn dispatch_submits_and_renders_changes() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let runner = EffectRunner::new(submitter.clone()).unwrap();
        let mut app = PanelApp::new(
            PanelState::from_layout(PanelLayout::hans()),
            runner,
            Vec::new(),
        );
        app.render_if_dirty().unwrap();

        app.dispatch(Msg::ButtonClicked {
            id: "hanssolo".to_string(),
        })
        .unwrap();
        app.dispatch(Msg::ButtonClicked {
            id: "missing".to_string(),
        })
        .unwrap();

        let text = String::from_utf8(app.out.clone()).unwrap();
        assert_eq!(text.matches("== HANS ==").count(), 2);
        assert!(text.contains("reply: Wait for the MAGIC!"));

        app.finish();
        assert_eq!(
            *submitter.seen.lock().unwrap(),
            vec![Submission::new("hanssolo")]
        );
    }
}
