//! Transcription orchestration over installed models.
//!
//! [`Transcriber`] is the entire surface the core exposes to
//! presentation layers: presence checks, downloads, and transcription.
//! Every call blocks; callers on latency-sensitive threads should use
//! [`Transcriber::transcribe_async`] or dispatch to a worker themselves.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use crate::engine::{RecognitionEngine, VoskEngine, WhisperEngine};
use crate::error::Error;
use crate::model::{Catalog, EngineKind, ModelStore, download};

/// One transcription call: which engine, which installed model, which
/// audio file. Requests are independent and share no state.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub kind: EngineKind,
    /// Model size (whisper) or language code (vosk).
    pub model_id: String,
    pub audio_path: PathBuf,
}

impl TranscriptionRequest {
    pub fn new(
        kind: EngineKind,
        model_id: impl Into<String>,
        audio_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            model_id: model_id.into(),
            audio_path: audio_path.into(),
        }
    }
}

/// Facade over catalog, store, and engines.
pub struct Transcriber {
    catalog: Catalog,
    store: ModelStore,
    whisper: Box<dyn RecognitionEngine>,
    vosk: Box<dyn RecognitionEngine>,
}

impl Transcriber {
    /// Builtin catalog, default store location, subprocess engines.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::builtin(),
            store: ModelStore::open_default(),
            whisper: Box::new(WhisperEngine::new()),
            vosk: Box::new(VoskEngine::new()),
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_store(mut self, store: ModelStore) -> Self {
        self.store = store;
        self
    }

    /// Replace the engine registered for `engine.kind()`.
    pub fn with_engine(mut self, engine: Box<dyn RecognitionEngine>) -> Self {
        match engine.kind() {
            EngineKind::Whisper => self.whisper = engine,
            EngineKind::Vosk => self.vosk = engine,
        }
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    fn engine(&self, kind: EngineKind) -> &dyn RecognitionEngine {
        match kind {
            EngineKind::Whisper => self.whisper.as_ref(),
            EngineKind::Vosk => self.vosk.as_ref(),
        }
    }

    /// Whether the model is installed and complete.
    pub fn is_model_present(&self, kind: EngineKind, id: &str) -> Result<bool, Error> {
        let descriptor = self.catalog.resolve(kind, id)?;
        Ok(self.store.exists(&descriptor))
    }

    /// Fetch and install the model unless it is already present.
    /// Present models return without any network traffic.
    pub fn download_model(&self, kind: EngineKind, id: &str) -> Result<PathBuf, Error> {
        download::ensure_model(&self.catalog, &self.store, kind, id)
    }

    /// Run one transcription request to completion.
    ///
    /// Preconditions are checked in order before any subprocess is
    /// spawned: the model must be installed, then the audio file must
    /// exist. Engine stdout is normalized before being returned.
    pub fn transcribe(&self, request: &TranscriptionRequest) -> Result<String, Error> {
        let descriptor = self.catalog.resolve(request.kind, &request.model_id)?;
        let model_path = self.store.path_for(&descriptor);
        if !self.store.exists(&descriptor) {
            return Err(Error::ModelNotFound(model_path));
        }
        if !request.audio_path.exists() {
            return Err(Error::AudioNotFound(request.audio_path.clone()));
        }

        let raw = self
            .engine(request.kind)
            .run(&model_path, &request.audio_path)?;
        Ok(normalize_transcript(&raw))
    }

    /// [`Transcriber::transcribe`] moved onto the blocking thread pool,
    /// for callers inside an async runtime.
    pub async fn transcribe_async(
        self: Arc<Self>,
        request: TranscriptionRequest,
    ) -> anyhow::Result<String> {
        tokio::task::spawn_blocking(move || self.transcribe(&request))
            .await
            .context("transcription task panicked")?
            .map_err(Into::into)
    }
}

impl Default for Transcriber {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse runs of whitespace (including newlines) to single spaces
/// and trim the edges.
pub fn normalize_transcript(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vosk::VoskModel;
    use crate::model::VOSK_COMPLETION_MARKER;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;

    /// Scripted engine that records every invocation.
    #[derive(Clone)]
    struct StubEngine {
        kind: EngineKind,
        output: std::result::Result<String, String>,
        invocations: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    }

    impl StubEngine {
        fn ok(kind: EngineKind, stdout: &str) -> Self {
            Self {
                kind,
                output: Ok(stdout.to_string()),
                invocations: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(kind: EngineKind, stderr: &str) -> Self {
            Self {
                kind,
                output: Err(stderr.to_string()),
                invocations: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn invocations(&self) -> Vec<(PathBuf, PathBuf)> {
            self.invocations.lock().unwrap().clone()
        }
    }

    impl RecognitionEngine for StubEngine {
        fn kind(&self) -> EngineKind {
            self.kind
        }

        fn run(&self, model_path: &Path, audio_path: &Path) -> Result<String, Error> {
            self.invocations
                .lock()
                .unwrap()
                .push((model_path.to_path_buf(), audio_path.to_path_buf()));
            match &self.output {
                Ok(stdout) => Ok(stdout.clone()),
                Err(stderr) => Err(Error::EngineFailed {
                    engine: self.kind.as_str(),
                    stderr: stderr.clone(),
                }),
            }
        }
    }

    fn fixture(engine: StubEngine) -> (tempfile::TempDir, Transcriber) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(
            "http://127.0.0.1:9",
            vec![VoskModel::new("xx", "http://127.0.0.1:9/xx.zip", "xx-model")],
        );
        let transcriber = Transcriber::new()
            .with_catalog(catalog)
            .with_store(ModelStore::new(dir.path()))
            .with_engine(Box::new(engine));
        (dir, transcriber)
    }

    fn install_whisper_model(transcriber: &Transcriber, id: &str) -> PathBuf {
        let descriptor = transcriber
            .catalog()
            .resolve(EngineKind::Whisper, id)
            .unwrap();
        transcriber.store().ensure_layout().unwrap();
        let path = transcriber.store().path_for(&descriptor);
        fs::write(&path, b"ggml").unwrap();
        path
    }

    fn touch_audio(dir: &Path) -> PathBuf {
        let path = dir.join("clip.wav");
        fs::write(&path, b"RIFF").unwrap();
        path
    }

    #[test]
    fn missing_model_fails_before_any_engine_invocation() {
        let stub = StubEngine::ok(EngineKind::Whisper, "never used");
        let (dir, transcriber) = fixture(stub.clone());
        let audio = touch_audio(dir.path());

        let request = TranscriptionRequest::new(EngineKind::Whisper, "small", audio);
        let err = transcriber.transcribe(&request).unwrap_err();

        assert!(matches!(err, Error::ModelNotFound(_)));
        assert!(stub.invocations().is_empty());
    }

    #[test]
    fn missing_audio_fails_before_any_engine_invocation() {
        let stub = StubEngine::ok(EngineKind::Whisper, "never used");
        let (dir, transcriber) = fixture(stub.clone());
        install_whisper_model(&transcriber, "small");

        let request = TranscriptionRequest::new(
            EngineKind::Whisper,
            "small",
            dir.path().join("no-such-clip.wav"),
        );
        let err = transcriber.transcribe(&request).unwrap_err();

        assert!(matches!(err, Error::AudioNotFound(_)));
        assert!(stub.invocations().is_empty());
    }

    #[test]
    fn engine_stdout_is_normalized() {
        let stub = StubEngine::ok(EngineKind::Whisper, "hello\nworld");
        let (dir, transcriber) = fixture(stub.clone());
        let model_path = install_whisper_model(&transcriber, "small");
        let audio = touch_audio(dir.path());

        let request = TranscriptionRequest::new(EngineKind::Whisper, "small", &audio);
        let text = transcriber.transcribe(&request).unwrap();

        assert_eq!(text, "hello world");
        assert_eq!(stub.invocations(), vec![(model_path, audio)]);
    }

    #[test]
    fn engine_failure_carries_stderr_verbatim() {
        let stub = StubEngine::failing(EngineKind::Whisper, "ggml_init: out of memory");
        let (dir, transcriber) = fixture(stub);
        install_whisper_model(&transcriber, "small");
        let audio = touch_audio(dir.path());

        let request = TranscriptionRequest::new(EngineKind::Whisper, "small", audio);
        let err = transcriber.transcribe(&request).unwrap_err();

        match err {
            Error::EngineFailed { stderr, .. } => {
                assert_eq!(stderr, "ggml_init: out of memory");
            }
            other => panic!("expected EngineFailed, got {other:?}"),
        }
    }

    #[test]
    fn vosk_requests_dispatch_to_the_vosk_engine() {
        let stub = StubEngine::ok(EngineKind::Vosk, "  spaced   out\ttext ");
        let (dir, transcriber) = fixture(stub.clone());

        let descriptor = transcriber.catalog().resolve(EngineKind::Vosk, "xx").unwrap();
        transcriber.store().ensure_layout().unwrap();
        let model_dir = transcriber.store().path_for(&descriptor);
        fs::create_dir_all(&model_dir).unwrap();
        fs::write(model_dir.join(VOSK_COMPLETION_MARKER), b"notes").unwrap();
        let audio = touch_audio(dir.path());

        let request = TranscriptionRequest::new(EngineKind::Vosk, "xx", audio);
        let text = transcriber.transcribe(&request).unwrap();

        assert_eq!(text, "spaced out text");
        assert_eq!(stub.invocations().len(), 1);
    }

    #[test]
    fn unknown_vosk_model_is_unsupported() {
        let stub = StubEngine::ok(EngineKind::Vosk, "");
        let (dir, transcriber) = fixture(stub);
        let audio = touch_audio(dir.path());

        let request = TranscriptionRequest::new(EngineKind::Vosk, "zz", audio);
        let err = transcriber.transcribe(&request).unwrap_err();
        assert!(matches!(err, Error::UnsupportedModel { .. }));

        assert!(matches!(
            transcriber.is_model_present(EngineKind::Vosk, "zz"),
            Err(Error::UnsupportedModel { .. })
        ));
    }

    #[test]
    fn normalization_collapses_all_interior_whitespace() {
        assert_eq!(normalize_transcript("hello\nworld"), "hello world");
        assert_eq!(normalize_transcript("  a \t b \r\n c  "), "a b c");
        assert_eq!(normalize_transcript(""), "");
        assert_eq!(normalize_transcript(" \n "), "");
    }

    #[tokio::test]
    async fn transcribe_async_runs_off_thread() {
        let stub = StubEngine::ok(EngineKind::Whisper, "async\ntranscript");
        let (dir, transcriber) = fixture(stub);
        install_whisper_model(&transcriber, "small");
        let audio = touch_audio(dir.path());

        let transcriber = Arc::new(transcriber);
        let request = TranscriptionRequest::new(EngineKind::Whisper, "small", audio);
        let text = transcriber.transcribe_async(request).await.unwrap();
        assert_eq!(text, "async transcript");
    }
}
