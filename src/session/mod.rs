//! Interactive timer session.
//!
//! The session is the single event loop of the program. It owns the
//! [`ModeController`] and the only tick interval, and it:
//! - Dispatches input events (start/stop, mode selection, quit)
//! - Ticks the controller once per second while the countdown runs
//! - Forwards every [`TimerEvent`] to the render, notification and sound
//!   collaborators
//!
//! Disabled collaborators are skipped. Collaborator failures are logged and
//! otherwise ignored.

use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cli::display::Renderer;
use crate::clock::{Clock, SystemClock};
use crate::controller::{ModeController, TimerEvent};
use crate::notification::Notifier;
use crate::sound::SoundPlayer;
use crate::types::{TimerConfig, TimerMode, TimerState};

/// Nominal time between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// InputEvent
// ============================================================================

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start the countdown if stopped, stop it if running
    Toggle,
    /// Start the countdown; no effect while running
    Start,
    /// Stop the countdown; no effect while stopped
    Stop,
    /// Switch to the given mode
    SelectMode(TimerMode),
    /// End the session
    Quit,
}

// ============================================================================
// Collaborators
// ============================================================================

/// The side-effect handlers the session forwards timer events to.
pub struct Collaborators {
    pub renderer: Box<dyn Renderer>,
    pub notifier: Box<dyn Notifier>,
    pub sound: Box<dyn SoundPlayer>,
}

impl Collaborators {
    /// Performs the side effect requested by `event`.
    ///
    /// Cues and notifications are skipped when their collaborator is disabled.
    pub fn dispatch(&self, event: TimerEvent) {
        match event {
            TimerEvent::ModeChanged { mode } => {
                if let Err(e) = self.renderer.highlight(mode) {
                    warn!("Failed to highlight mode: {}", e);
                }
            }
            TimerEvent::Render { remaining, mode } => {
                if let Err(e) = self.renderer.render(&remaining, mode) {
                    warn!("Failed to render clock: {}", e);
                }
            }
            TimerEvent::PlayCue { .. } if self.sound.is_disabled() => {
                debug!("Sound disabled, skipping cue");
            }
            TimerEvent::PlayCue { mode } => {
                if let Err(e) = self.sound.play_cue(mode) {
                    warn!("Failed to play cue: {} ({})", e, e.suggestion());
                }
            }
            TimerEvent::Notify { .. } if self.notifier.is_disabled() => {
                debug!("Notifications disabled, skipping");
            }
            TimerEvent::Notify { message, .. } => {
                if let Err(e) = self.notifier.notify(&message) {
                    warn!("Failed to send notification: {} ({})", e, e.suggestion());
                }
            }
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Runs one timer until the user quits.
pub struct Session<C: Clock = SystemClock> {
    controller: ModeController<C>,
    events: mpsc::UnboundedReceiver<TimerEvent>,
    collaborators: Collaborators,
}

impl Session<SystemClock> {
    /// Creates a session on the wall clock.
    pub fn new(config: TimerConfig, collaborators: Collaborators) -> Self {
        Self::with_clock(config, SystemClock, collaborators)
    }
}

impl<C: Clock> Session<C> {
    /// Creates a session reading time from `clock`.
    pub fn with_clock(config: TimerConfig, clock: C, collaborators: Collaborators) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        Self {
            controller: ModeController::with_clock(config, clock, event_tx),
            events,
            collaborators,
        }
    }

    /// Processes input and ticks until `Quit` arrives or the input closes.
    ///
    /// Returns the final timer state.
    pub async fn run(mut self, mut input: mpsc::Receiver<InputEvent>) -> TimerState {
        let mut ticker = interval(TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.controller.switch_mode(TimerMode::Pomodoro);
        self.flush_events();

        loop {
            let was_running = self.controller.is_running();
            tokio::select! {
                event = input.recv() => {
                    let Some(event) = event else {
                        debug!("Input closed");
                        break;
                    };
                    if !self.handle_input(event) {
                        break;
                    }
                }
                _ = ticker.tick(), if was_running => {
                    self.controller.tick();
                }
            }
            if !was_running && self.controller.is_running() {
                // First tick one period after the start.
                ticker.reset();
            }
            self.flush_events();
        }

        self.flush_events();
        let state = self.controller.state().clone();
        info!(
            sessions = state.sessions_completed,
            mode = %state.mode,
            "Session ended"
        );
        state
    }

    /// Applies one input event. Returns false when the session should end.
    fn handle_input(&mut self, event: InputEvent) -> bool {
        debug!(?event, "Input");
        match event {
            InputEvent::Toggle => self.controller.toggle(),
            InputEvent::Start => self.controller.start(),
            InputEvent::Stop => self.controller.stop(),
            InputEvent::SelectMode(mode) => self.controller.switch_mode(mode),
            InputEvent::Quit => return false,
        }
        true
    }

    fn flush_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.collaborators.dispatch(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cli::display::{MockRenderer, RenderCall};
    use crate::notification::MockNotifier;
    use crate::sound::MockSoundPlayer;
    use crate::types::Remaining;

    struct Mocks {
        renderer: Arc<MockRenderer>,
        notifier: Arc<MockNotifier>,
        sound: Arc<MockSoundPlayer>,
    }

    fn collaborators() -> (Collaborators, Mocks) {
        let mocks = Mocks {
            renderer: Arc::new(MockRenderer::new()),
            notifier: Arc::new(MockNotifier::new()),
            sound: Arc::new(MockSoundPlayer::new()),
        };
        let collaborators = Collaborators {
            renderer: Box::new(Arc::clone(&mocks.renderer)),
            notifier: Box::new(Arc::clone(&mocks.notifier)),
            sound: Box::new(Arc::clone(&mocks.sound)),
        };
        (collaborators, mocks)
    }

    #[test]
    fn test_dispatch_routes_each_event() {
        let (collaborators, mocks) = collaborators();

        collaborators.dispatch(TimerEvent::ModeChanged {
            mode: TimerMode::LongBreak,
        });
        collaborators.dispatch(TimerEvent::Render {
            remaining: Remaining::full(15),
            mode: TimerMode::LongBreak,
        });
        collaborators.dispatch(TimerEvent::PlayCue {
            mode: TimerMode::LongBreak,
        });
        collaborators.dispatch(TimerEvent::Notify {
            mode: TimerMode::LongBreak,
            message: "Take a long break!".to_string(),
        });

        assert_eq!(
            mocks.renderer.calls(),
            vec![
                RenderCall::Highlight(TimerMode::LongBreak),
                RenderCall::Render(Remaining::full(15), TimerMode::LongBreak),
            ]
        );
        assert_eq!(mocks.sound.get_play_calls(), vec![TimerMode::LongBreak]);
        assert_eq!(mocks.notifier.messages(), vec!["Take a long break!"]);
    }

    #[test]
    fn test_dispatch_swallows_collaborator_failures() {
        let (collaborators, mocks) = collaborators();
        mocks.notifier.set_should_fail(true);
        mocks.sound.set_should_fail(true);

        collaborators.dispatch(TimerEvent::PlayCue {
            mode: TimerMode::Pomodoro,
        });
        collaborators.dispatch(TimerEvent::Notify {
            mode: TimerMode::Pomodoro,
            message: "Get back to work!".to_string(),
        });

        assert_eq!(mocks.sound.play_count(), 0);
        assert_eq!(mocks.notifier.messages().len(), 1);
    }

    #[test]
    fn test_dispatch_skips_disabled_collaborators() {
        let (collaborators, mocks) = collaborators();
        mocks.notifier.set_disabled(true);
        mocks.sound.set_disabled(true);

        collaborators.dispatch(TimerEvent::PlayCue {
            mode: TimerMode::ShortBreak,
        });
        collaborators.dispatch(TimerEvent::Notify {
            mode: TimerMode::ShortBreak,
            message: "Take a break!".to_string(),
        });

        assert_eq!(mocks.sound.play_count(), 0);
        assert!(mocks.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_run_start_and_stop_words_are_idempotent() {
        let (collaborators, _mocks) = collaborators();
        let session = Session::new(TimerConfig::default(), collaborators);
        let (tx, rx) = mpsc::channel(8);

        for event in [
            InputEvent::Stop,
            InputEvent::Start,
            InputEvent::Start,
            InputEvent::Quit,
        ] {
            tx.send(event).await.unwrap();
        }
        let state = session.run(rx).await;

        assert!(state.running);
        assert_eq!(state.sessions_completed, 1);
    }

    #[tokio::test]
    async fn test_run_renders_initial_state_and_quits() {
        let (collaborators, mocks) = collaborators();
        let session = Session::new(TimerConfig::default(), collaborators);
        let (tx, rx) = mpsc::channel(4);

        tx.send(InputEvent::Quit).await.unwrap();
        let state = session.run(rx).await;

        assert_eq!(state.mode, TimerMode::Pomodoro);
        assert!(!state.running);
        assert_eq!(
            mocks.renderer.calls(),
            vec![
                RenderCall::Highlight(TimerMode::Pomodoro),
                RenderCall::Render(Remaining::full(25), TimerMode::Pomodoro),
            ]
        );
    }

    #[tokio::test]
    async fn test_run_ends_when_input_closes() {
        let (collaborators, _mocks) = collaborators();
        let session = Session::new(TimerConfig::default(), collaborators);
        let (tx, rx) = mpsc::channel(4);

        tx.send(InputEvent::Toggle).await.unwrap();
        drop(tx);
        let state = session.run(rx).await;

        assert!(state.running);
        assert_eq!(state.sessions_completed, 1);
    }
}
