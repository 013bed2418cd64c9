//! Action tests against fake capability providers

#[cfg(test)]
mod action_tests {
    use crate::{DisabledClipboard, DisabledVoice, DojoActions, StatusKind};
    use async_trait::async_trait;
    use flame_core::{ClipboardProvider, Error, Result, VoiceProvider};
    use flame_dojo::{assess, forge, FOUNDATION_LESSON, SYMBOL_CARDS};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeVoice {
        spoken: Mutex<Vec<String>>,
        speaking: Mutex<bool>,
        cancels: Mutex<u32>,
        fail: bool,
    }

    #[async_trait]
    impl VoiceProvider for FakeVoice {
        fn is_available(&self) -> bool {
            true
        }

        async fn speak(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Capability("speech engine crashed".to_string()));
            }
            self.spoken.lock().unwrap().push(text.to_string());
            *self.speaking.lock().unwrap() = true;
            Ok(())
        }

        async fn cancel(&self) -> Result<()> {
            *self.speaking.lock().unwrap() = false;
            *self.cancels.lock().unwrap() += 1;
            Ok(())
        }

        async fn is_speaking(&self) -> bool {
            *self.speaking.lock().unwrap()
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        contents: Mutex<Option<String>>,
        fail: bool,
    }

    #[async_trait]
    impl ClipboardProvider for FakeClipboard {
        fn is_available(&self) -> bool {
            true
        }

        async fn write_text(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Capability("permission denied".to_string()));
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn working() -> (Arc<FakeVoice>, Arc<FakeClipboard>, DojoActions) {
        let voice = Arc::new(FakeVoice::default());
        let clipboard = Arc::new(FakeClipboard::default());
        let actions = DojoActions::new(voice.clone(), clipboard.clone());
        (voice, clipboard, actions)
    }

    fn unsupported() -> DojoActions {
        DojoActions::new(Arc::new(DisabledVoice), Arc::new(DisabledClipboard))
    }

    #[tokio::test]
    async fn test_voice_unsupported_reported_before_missing_content() {
        let actions = unsupported();

        let status = actions.read_report(None).await;
        assert_eq!(status.kind, StatusKind::Unsupported);
        assert_eq!(status.text, crate::VOICE_UNAVAILABLE);
        assert!(!status.text.contains("browser"));

        let status = actions.read_sentence(None).await;
        assert_eq!(status.kind, StatusKind::Unsupported);

        let status = actions.read_lesson(FOUNDATION_LESSON).await.unwrap();
        assert_eq!(status.kind, StatusKind::Unsupported);

        assert_eq!(
            actions.voice_readiness(),
            "Voice mode is not available on this machine. Set FLAME_VOICE_COMMAND to a speech program."
        );
    }

    #[tokio::test]
    async fn test_clipboard_missing_content_reported_before_unsupported() {
        let actions = unsupported();

        let status = actions.copy_report(None).await;
        assert_eq!(status.kind, StatusKind::MissingContent);
        assert_eq!(
            status.text,
            "Run an assessment first. The dojo copies reports, not empty pages."
        );

        let status = actions.copy_sentence(Some("   ")).await;
        assert_eq!(status.kind, StatusKind::MissingContent);
        assert_eq!(status.text, "Nothing to copy. Forge a structured sentence first.");

        let report = assess("[INTENT] x");
        let status = actions.copy_report(Some(&report)).await;
        assert_eq!(status.kind, StatusKind::Unsupported);
        assert_eq!(
            status.text,
            "Clipboard not supported. Select and copy the report manually."
        );

        let status = actions.copy_sentence(Some("[INTENT] x")).await;
        assert_eq!(status.text, "Clipboard not supported. Select and copy manually.");
    }

    #[tokio::test]
    async fn test_missing_content_for_voice() {
        let (voice, _, actions) = working();

        let status = actions.read_report(None).await;
        assert_eq!(status.kind, StatusKind::MissingContent);
        assert_eq!(
            status.text,
            "Run an assessment first. The dojo reads reports after they exist."
        );

        let status = actions.read_sentence(Some("")).await;
        assert_eq!(
            status.text,
            "Nothing to read yet. Forge a structured sentence first."
        );

        assert!(actions.read_lesson("  \n ").await.is_none());
        assert!(voice.spoken.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_actions_pass_explicit_content() {
        let (voice, clipboard, actions) = working();
        let sentence = forge("Help new hires set up their laptops").unwrap();
        let report = assess(&sentence);

        assert_eq!(
            actions.voice_readiness(),
            "Voice engine detected. Type 'speak lesson' to hear the foundation lesson."
        );

        let status = actions.read_sentence(Some(&sentence)).await;
        assert!(status.is_success());
        assert_eq!(status.text, "Reading structured Flame sentence...");

        let status = actions.read_report(Some(&report)).await;
        assert_eq!(status.text, "Reading assessment report...");

        let status = actions.read_symbol_card(&SYMBOL_CARDS[0]).await;
        assert_eq!(status.text, "Reading current symbol card...");

        let status = actions.read_lesson(FOUNDATION_LESSON).await.unwrap();
        assert_eq!(status.text, "Reading foundation lesson...");

        let spoken = voice.spoken.lock().unwrap().clone();
        assert_eq!(spoken.len(), 4);
        assert_eq!(spoken[0], sentence);
        assert_eq!(spoken[1], report.render());
        assert_eq!(spoken[2], SYMBOL_CARDS[0].narration());

        let status = actions.copy_report(Some(&report)).await;
        assert_eq!(
            status.text,
            "Assessment report copied to clipboard for instructor review."
        );
        assert_eq!(
            clipboard.contents.lock().unwrap().as_deref(),
            Some(report.render().as_str())
        );

        let status = actions.copy_sentence(Some(&sentence)).await;
        assert_eq!(status.text, "Structured sentence copied to clipboard.");
        assert_eq!(
            clipboard.contents.lock().unwrap().as_deref(),
            Some(sentence.as_str())
        );
    }

    #[tokio::test]
    async fn test_runtime_failures() {
        let voice = Arc::new(FakeVoice {
            fail: true,
            ..Default::default()
        });
        let clipboard = Arc::new(FakeClipboard {
            fail: true,
            ..Default::default()
        });
        let actions = DojoActions::new(voice, clipboard);
        let report = assess("[INTENT] x");

        let status = actions.copy_report(Some(&report)).await;
        assert_eq!(status.kind, StatusKind::Failed);
        assert_eq!(
            status.text,
            "Unable to access clipboard. Select and copy the report manually."
        );

        let status = actions.copy_sentence(Some("[INTENT] x")).await;
        assert_eq!(status.text, "Unable to access clipboard. Select and copy manually.");

        // Speech errors are logged and never surface as a failure.
        let status = actions.read_report(Some(&report)).await;
        assert_eq!(status.kind, StatusKind::Success);
    }

    #[tokio::test]
    async fn test_stop_only_cancels_while_speaking() {
        let (voice, _, actions) = working();

        actions.stop_speaking().await;
        assert_eq!(*voice.cancels.lock().unwrap(), 0);

        actions.read_sentence(Some("[INTENT] stop me")).await;
        actions.stop_speaking().await;
        assert_eq!(*voice.cancels.lock().unwrap(), 1);
        assert!(!voice.is_speaking().await);
    }
}
