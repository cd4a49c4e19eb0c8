use std::rc::Rc;
use std::sync::{Arc, Once};
use std::time::Duration;

use rstest::rstest;
use tokio::sync::mpsc;
use tokio::task::LocalSet;
use tokio::time::timeout;

use crate::audio::mock::MockPlayer;
use crate::screen::actor::{ScreenActor, ScreenClients};
use crate::screen::events::{NoticeLevel, ScreenEvent};
use crate::settings::config::Credentials;
use crate::settings::SettingsManager;
use crate::speech::tts::mock::{MockSynthesisBehavior, MockSynthesizer};
use crate::translate::mock::{MockTranslateBehavior, MockTranslator};
use crate::translate::types::Language;

static TRACING_INIT: Once = Once::new();

fn setup_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

struct TestFixture {
    actor: ScreenActor,
    events: mpsc::UnboundedReceiver<ScreenEvent>,
    translator: Arc<MockTranslator>,
    synthesizer: Arc<MockSynthesizer>,
    player: Rc<MockPlayer>,
    _settings_dir: tempfile::TempDir,
}

impl TestFixture {
    /// Launch the actor with mock clients and configured credentials.
    /// Must run inside a `LocalSet`. Consumes the startup
    /// `TargetLanguageChanged` event.
    async fn launch(behavior: MockTranslateBehavior) -> Self {
        Self::launch_with(behavior, MockSynthesisBehavior::Silence, MockPlayer::new()).await
    }

    async fn launch_with(
        translate_behavior: MockTranslateBehavior,
        synthesis_behavior: MockSynthesisBehavior,
        player: MockPlayer,
    ) -> Self {
        setup_tracing();

        let settings_dir = tempfile::TempDir::new().expect("Failed to create settings dir");
        let settings = SettingsManager::from_path(settings_dir.path().join("settings.toml"))
            .expect("Failed to create settings manager");
        settings.update_setting(|s| {
            let creds = Credentials {
                username: "user".to_string(),
                password: "secret".to_string(),
            };
            s.translation.credentials = creds.clone();
            s.text_to_speech.credentials = creds.clone();
            s.speech_to_text.credentials = creds;
        });

        let translator = Arc::new(MockTranslator::new(translate_behavior));
        let synthesizer = Arc::new(MockSynthesizer::new(synthesis_behavior));
        let player = Rc::new(player);

        let clients = ScreenClients {
            translator: translator.clone(),
            synthesizer: synthesizer.clone(),
            player: player.clone(),
        };

        let (actor, mut events) = ScreenActor::launch(clients, settings);

        let startup = recv(&mut events).await;
        assert!(
            matches!(startup, ScreenEvent::TargetLanguageChanged(Language::Spanish)),
            "expected startup language event, got {startup:?}"
        );

        Self {
            actor,
            events,
            translator,
            synthesizer,
            player,
            _settings_dir: settings_dir,
        }
    }

    /// The next event, skipping busy transitions.
    async fn next_quiet(&mut self) -> ScreenEvent {
        loop {
            match recv(&mut self.events).await {
                ScreenEvent::BusyChanged(_) => continue,
                event => return event,
            }
        }
    }

    /// Assert the actor emits nothing beyond busy transitions after
    /// settling.
    async fn assert_silent(&mut self) {
        tokio::time::sleep(Duration::from_millis(20)).await;
        while let Ok(event) = self.events.try_recv() {
            if !matches!(event, ScreenEvent::BusyChanged(_)) {
                panic!("expected no events, got {event:?}");
            }
        }
    }
}

async fn recv(events: &mut mpsc::UnboundedReceiver<ScreenEvent>) -> ScreenEvent {
    timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

#[tokio::test]
async fn translate_control_follows_input_edges() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Echo).await;

            // Still empty: no edge.
            fixture.actor.input_changed(String::new()).unwrap();
            fixture.assert_silent().await;

            // First character enables.
            fixture.actor.input_changed("h".to_string()).unwrap();
            assert!(matches!(
                fixture.next_quiet().await,
                ScreenEvent::TranslateEnabled(true)
            ));

            // Further typing fires nothing.
            fixture.actor.input_changed("he".to_string()).unwrap();
            fixture.actor.input_changed("hello".to_string()).unwrap();
            fixture.assert_silent().await;

            // Deleting everything disables.
            fixture.actor.input_changed(String::new()).unwrap();
            assert!(matches!(
                fixture.next_quiet().await,
                ScreenEvent::TranslateEnabled(false)
            ));
        })
        .await;
}

#[tokio::test]
async fn translate_displays_first_candidate_only() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Echo).await;

            fixture.actor.input_changed("hola".to_string()).unwrap();
            assert!(matches!(
                fixture.next_quiet().await,
                ScreenEvent::TranslateEnabled(true)
            ));

            fixture.actor.translate().unwrap();

            let ScreenEvent::TranslationUpdated(text) = fixture.next_quiet().await else {
                panic!("expected TranslationUpdated");
            };
            assert_eq!(text, "es:hola");
            assert!(!text.contains("alternate"));

            // The play control enables with the first translation.
            assert!(matches!(
                fixture.next_quiet().await,
                ScreenEvent::PlayEnabled(true)
            ));

            let request = fixture.translator.last_captured_request().unwrap();
            assert_eq!(request.text, "hola");
            assert_eq!(request.source, Language::English);
            assert_eq!(request.target, Language::Spanish);
        })
        .await;
}

#[tokio::test]
async fn translate_with_empty_input_is_ignored() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Echo).await;

            fixture.actor.translate().unwrap();
            fixture.assert_silent().await;
            assert_eq!(fixture.translator.call_count(), 0);
        })
        .await;
}

#[tokio::test]
async fn failed_translation_keeps_prior_text_and_notifies_once() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Queue {
                behaviors: vec![MockTranslateBehavior::Echo, MockTranslateBehavior::AlwaysError],
            })
            .await;

            fixture.actor.input_changed("hola".to_string()).unwrap();
            fixture.actor.translate().unwrap();

            loop {
                if matches!(fixture.next_quiet().await, ScreenEvent::PlayEnabled(true)) {
                    break;
                }
            }

            // Second translation fails.
            fixture.actor.translate().unwrap();
            let ScreenEvent::Notice(notice) = fixture.next_quiet().await else {
                panic!("expected a notice");
            };
            assert_eq!(notice.level, NoticeLevel::Error);
            assert!(notice.message.contains("mock translation error"));

            // Exactly one notice, and no display update.
            fixture.assert_silent().await;

            // The prior translation is still what gets spoken.
            fixture.actor.speak().unwrap();
            loop {
                match recv(&mut fixture.events).await {
                    ScreenEvent::BusyChanged(false) => break,
                    _ => continue,
                }
            }
            let spoken = fixture.synthesizer.last_captured_request().unwrap();
            assert_eq!(spoken.text, "es:hola");
        })
        .await;
}

#[tokio::test]
async fn racing_translations_show_one_complete_result() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Queue {
                behaviors: vec![
                    MockTranslateBehavior::EchoAfter { delay_ms: 80 },
                    MockTranslateBehavior::EchoAfter { delay_ms: 10 },
                ],
            })
            .await;

            fixture.actor.input_changed("one".to_string()).unwrap();
            fixture.actor.translate().unwrap();
            fixture.actor.input_changed("two".to_string()).unwrap();
            fixture.actor.translate().unwrap();

            let mut updates = Vec::new();
            while updates.len() < 2 {
                if let ScreenEvent::TranslationUpdated(text) = fixture.next_quiet().await {
                    updates.push(text);
                }
            }

            // Both results land whole; arrival order decides the display.
            let legitimate = ["es:one".to_string(), "es:two".to_string()];
            assert!(legitimate.contains(&updates[0]));
            assert!(legitimate.contains(&updates[1]));
            assert_ne!(updates[0], updates[1]);

            // With the scripted delays the slow first click arrives last.
            assert_eq!(updates[1], "es:one");
        })
        .await;
}

#[rstest]
#[case(Language::Spanish, "es")]
#[case(Language::French, "fr")]
#[case(Language::Italian, "it")]
#[tokio::test]
async fn selected_target_routes_to_client(#[case] target: Language, #[case] code: &str) {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Echo).await;

            fixture.actor.set_target_language(target).unwrap();
            let ScreenEvent::TargetLanguageChanged(selected) = fixture.next_quiet().await else {
                panic!("expected TargetLanguageChanged");
            };
            assert_eq!(selected, target);

            fixture.actor.input_changed("hello".to_string()).unwrap();
            fixture.actor.translate().unwrap();

            loop {
                if let ScreenEvent::TranslationUpdated(text) = fixture.next_quiet().await {
                    assert_eq!(text, format!("{code}:hello"));
                    break;
                }
            }

            let request = fixture.translator.last_captured_request().unwrap();
            assert_eq!(request.source, Language::English);
            assert_eq!(request.target, target);
        })
        .await;
}

#[tokio::test]
async fn speak_plays_synthesized_translation() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Echo).await;

            fixture.actor.input_changed("hola".to_string()).unwrap();
            fixture.actor.translate().unwrap();
            loop {
                if matches!(fixture.next_quiet().await, ScreenEvent::PlayEnabled(true)) {
                    break;
                }
            }

            fixture.actor.speak().unwrap();
            loop {
                match recv(&mut fixture.events).await {
                    ScreenEvent::BusyChanged(false) => break,
                    _ => continue,
                }
            }

            let request = fixture.synthesizer.last_captured_request().unwrap();
            assert_eq!(request.text, "es:hola");
            assert_eq!(request.voice_id, "en-US_LisaVoice");
            assert_eq!(fixture.player.play_count(), 1);
        })
        .await;
}

#[tokio::test]
async fn speak_with_empty_translation_is_ignored() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch(MockTranslateBehavior::Echo).await;

            fixture.actor.speak().unwrap();
            fixture.assert_silent().await;
            assert_eq!(fixture.synthesizer.call_count(), 0);
        })
        .await;
}

#[tokio::test]
async fn synthesis_failure_raises_one_notice() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch_with(
                MockTranslateBehavior::Echo,
                MockSynthesisBehavior::AlwaysError,
                MockPlayer::new(),
            )
            .await;

            fixture.actor.input_changed("hola".to_string()).unwrap();
            fixture.actor.translate().unwrap();
            loop {
                if matches!(fixture.next_quiet().await, ScreenEvent::PlayEnabled(true)) {
                    break;
                }
            }

            fixture.actor.speak().unwrap();
            let ScreenEvent::Notice(notice) = fixture.next_quiet().await else {
                panic!("expected a notice");
            };
            assert_eq!(notice.level, NoticeLevel::Error);
            assert!(notice.message.contains("mock synthesis error"));

            fixture.assert_silent().await;
            assert_eq!(fixture.player.play_count(), 0);
        })
        .await;
}

#[tokio::test]
async fn playback_failure_raises_one_notice() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut fixture = TestFixture::launch_with(
                MockTranslateBehavior::Echo,
                MockSynthesisBehavior::Silence,
                MockPlayer::failing(),
            )
            .await;

            fixture.actor.input_changed("hola".to_string()).unwrap();
            fixture.actor.translate().unwrap();
            loop {
                if matches!(fixture.next_quiet().await, ScreenEvent::PlayEnabled(true)) {
                    break;
                }
            }

            fixture.actor.speak().unwrap();
            let ScreenEvent::Notice(notice) = fixture.next_quiet().await else {
                panic!("expected a notice");
            };
            assert_eq!(notice.level, NoticeLevel::Error);
            assert!(notice.message.contains("mock playback failure"));
            fixture.assert_silent().await;
        })
        .await;
}

#[tokio::test]
async fn unconfigured_credentials_notify_at_startup() {
    let local = LocalSet::new();
    local
        .run_until(async {
            setup_tracing();

            let settings_dir = tempfile::TempDir::new().unwrap();
            let settings =
                SettingsManager::from_path(settings_dir.path().join("settings.toml")).unwrap();

            let clients = ScreenClients {
                translator: Arc::new(MockTranslator::default()),
                synthesizer: Arc::new(MockSynthesizer::default()),
                player: Rc::new(MockPlayer::new()),
            };

            let (_actor, mut events) = ScreenActor::launch(clients, settings);

            let ScreenEvent::Notice(notice) = recv(&mut events).await else {
                panic!("expected a startup notice");
            };
            assert_eq!(notice.level, NoticeLevel::Error);
            assert!(notice.message.contains("not configured"));
        })
        .await;
}
