use std::rc::Rc;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::audio::playback::AudioPlayer;
use crate::audio::Playback;
use crate::error::ServiceError;
use crate::screen::empty_watch::EmptyWatch;
use crate::screen::events::{EventSender, Notice, ScreenEvent};
use crate::settings::SettingsManager;
use crate::speech::tts::watson::{WatsonSynthesizer, WatsonSynthesizerConfig};
use crate::speech::types::Voice;
use crate::speech::Synthesizer;
use crate::translate::types::{Language, Translation};
use crate::translate::watson::{WatsonTranslator, WatsonTranslatorConfig};
use crate::translate::Translator;

/// The possible inputs to the screen actor: the three user events of the
/// screen plus the raw text feed that drives control enablement.
#[derive(Debug, Clone)]
pub enum ScreenRequest {
    /// The input field content changed (sent per edit; the actor only
    /// reacts to the empty/non-empty edge).
    InputChanged(String),

    /// The user picked a different target language. No network call.
    SetTargetLanguage(Language),

    /// Translate the current input. Ignored while the input is empty.
    Translate,

    /// Synthesize and play the displayed translation. Ignored while the
    /// display is empty.
    Speak,
}

/// The screen actor implements the whole screen: it owns the UI state
/// (input text, displayed translation, target language), validates user
/// actions, and dispatches one background task per action.
///
/// UI applications contain no application logic; they forward user input
/// as `ScreenRequest`s and render the `ScreenEvent`s that come back.
/// Background tasks never touch UI state directly - they report back to
/// the actor, which is the only writer of the displayed translation.
/// Two rapid translate actions therefore race only in arrival order;
/// the display always holds one complete result.
pub struct ScreenActor {
    pub tx: mpsc::UnboundedSender<ScreenRequest>,
}

/// The remote clients and the audio sink the actor drives. Bundled so
/// tests can swap every seam for a mock.
pub struct ScreenClients {
    pub translator: Arc<dyn Translator>,
    pub synthesizer: Arc<dyn Synthesizer>,
    pub player: Rc<dyn Playback>,
}

impl ScreenClients {
    /// Production wiring: Watson clients from settings plus the default
    /// output device.
    pub fn from_settings(settings: &SettingsManager) -> Result<Self> {
        let config = settings.settings();

        let mut translator_config =
            WatsonTranslatorConfig::new(config.translation.credentials.clone());
        if let Some(endpoint) = &config.translation.endpoint {
            translator_config.endpoint = endpoint.clone();
        }

        let mut synthesizer_config =
            WatsonSynthesizerConfig::new(config.text_to_speech.credentials.clone());
        if let Some(endpoint) = &config.text_to_speech.endpoint {
            synthesizer_config.endpoint = endpoint.clone();
        }

        Ok(Self {
            translator: Arc::new(WatsonTranslator::new(translator_config)),
            synthesizer: Arc::new(WatsonSynthesizer::new(synthesizer_config)),
            player: Rc::new(AudioPlayer::new()?),
        })
    }
}

impl ScreenActor {
    /// Launch the screen actor and return a handle to it along with the
    /// event stream. Must be called within a tokio `LocalSet` - playback
    /// is not `Send`.
    pub fn launch(
        clients: ScreenClients,
        settings: SettingsManager,
    ) -> (Self, mpsc::UnboundedReceiver<ScreenEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (event_sender, event_rx) = EventSender::new();

        tokio::task::spawn_local(async move {
            let config = settings.settings();

            if !config.translation.credentials.is_configured()
                || !config.text_to_speech.credentials.is_configured()
            {
                event_sender.notice(Notice::error(format!(
                    "Service credentials are not configured. Edit {}",
                    settings.path().display()
                )));
            }

            let (done_tx, done_rx) = mpsc::unbounded_channel();

            let voice = if config.voice.is_empty() {
                clients.synthesizer.default_voice()
            } else {
                Voice::from_id(config.voice.clone())
            };

            let state = ActorState {
                event_sender,
                translator: clients.translator,
                synthesizer: clients.synthesizer,
                player: clients.player,
                target: config.target_language,
                voice,
                input: String::new(),
                translated: String::new(),
                input_watch: EmptyWatch::new(),
                translated_watch: EmptyWatch::new(),
                done_tx,
                in_flight: 0,
            };

            // Let the UI pick up the startup selection.
            state
                .event_sender
                .send(ScreenEvent::TargetLanguageChanged(state.target));

            run_actor(state, rx, done_rx).await;
        });

        (ScreenActor { tx }, event_rx)
    }

    pub fn input_changed(&self, text: String) -> Result<()> {
        self.tx.send(ScreenRequest::InputChanged(text))?;
        Ok(())
    }

    pub fn set_target_language(&self, language: Language) -> Result<()> {
        self.tx.send(ScreenRequest::SetTargetLanguage(language))?;
        Ok(())
    }

    pub fn translate(&self) -> Result<()> {
        self.tx.send(ScreenRequest::Translate)?;
        Ok(())
    }

    pub fn speak(&self) -> Result<()> {
        self.tx.send(ScreenRequest::Speak)?;
        Ok(())
    }
}

/// Completion of a background task, reported back to the actor.
enum TaskOutcome {
    Translated(Result<Translation, ServiceError>),
    Spoke(Result<(), anyhow::Error>),
}

struct ActorState {
    event_sender: EventSender,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn Synthesizer>,
    player: Rc<dyn Playback>,
    target: Language,
    voice: Voice,
    input: String,
    translated: String,
    input_watch: EmptyWatch,
    translated_watch: EmptyWatch,
    done_tx: mpsc::UnboundedSender<TaskOutcome>,
    in_flight: usize,
}

async fn run_actor(
    mut state: ActorState,
    mut rx: mpsc::UnboundedReceiver<ScreenRequest>,
    mut done_rx: mpsc::UnboundedReceiver<TaskOutcome>,
) {
    info!("ScreenActor started");

    loop {
        tokio::select! {
            request = rx.recv() => {
                let Some(request) = request else {
                    // Every handle dropped; the screen is gone.
                    break;
                };
                handle_request(&mut state, request);
            }

            Some(outcome) = done_rx.recv() => {
                handle_outcome(&mut state, outcome);
            }
        }
    }
}

fn handle_request(state: &mut ActorState, request: ScreenRequest) {
    match request {
        ScreenRequest::InputChanged(text) => {
            state.input = text;
            if let Some(enabled) = state.input_watch.observe(&state.input) {
                state
                    .event_sender
                    .send(ScreenEvent::TranslateEnabled(enabled));
            }
        }

        ScreenRequest::SetTargetLanguage(language) => {
            state.target = language;
            state
                .event_sender
                .send(ScreenEvent::TargetLanguageChanged(language));
        }

        ScreenRequest::Translate => handle_translate(state),

        ScreenRequest::Speak => handle_speak(state),
    }
}

fn handle_translate(state: &mut ActorState) {
    if state.input.is_empty() {
        return;
    }

    let translator = state.translator.clone();
    let text = state.input.clone();
    let target = state.target;
    let done_tx = state.done_tx.clone();

    task_started(state);
    tokio::task::spawn_local(async move {
        let result = translator.translate(&text, Language::English, target).await;
        let _ = done_tx.send(TaskOutcome::Translated(result));
    });
}

fn handle_speak(state: &mut ActorState) {
    if state.translated.is_empty() {
        return;
    }

    let synthesizer = state.synthesizer.clone();
    let player = state.player.clone();
    let text = state.translated.clone();
    let voice = state.voice.clone();
    let done_tx = state.done_tx.clone();

    task_started(state);
    tokio::task::spawn_local(async move {
        let result = match synthesizer.synthesize(&text, &voice).await {
            Ok(audio) => player.play_to_end(audio).await,
            Err(e) => Err(e.into()),
        };
        let _ = done_tx.send(TaskOutcome::Spoke(result));
    });
}

fn handle_outcome(state: &mut ActorState, outcome: TaskOutcome) {
    match outcome {
        TaskOutcome::Translated(Ok(translation)) => {
            // Only the first candidate is ever displayed.
            match translation.first() {
                Some(first) => show_translation(state, first.to_string()),
                None => {
                    error!("translation succeeded with no candidates");
                    state
                        .event_sender
                        .notice(Notice::error("Translation returned no result".to_string()));
                }
            }
        }

        TaskOutcome::Translated(Err(e)) => {
            // Prior display state stays untouched; one notice, no retry.
            error!(error = %e, "translation failed");
            state.event_sender.notice(Notice::error(e.to_string()));
        }

        TaskOutcome::Spoke(Ok(())) => {}

        TaskOutcome::Spoke(Err(e)) => {
            error!(error = %e, "speech playback failed");
            state.event_sender.notice(Notice::error(e.to_string()));
        }
    }

    task_finished(state);
}

fn show_translation(state: &mut ActorState, text: String) {
    state.translated = text.clone();
    state
        .event_sender
        .send(ScreenEvent::TranslationUpdated(text));
    if let Some(enabled) = state.translated_watch.observe(&state.translated) {
        state.event_sender.send(ScreenEvent::PlayEnabled(enabled));
    }
}

fn task_started(state: &mut ActorState) {
    state.in_flight += 1;
    if state.in_flight == 1 {
        state.event_sender.set_busy(true);
    }
}

fn task_finished(state: &mut ActorState) {
    state.in_flight = state.in_flight.saturating_sub(1);
    if state.in_flight == 0 {
        state.event_sender.set_busy(false);
    }
}
