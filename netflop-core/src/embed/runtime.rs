//! Lazy, page-wide loading of the embeddable player runtime.

use std::fmt::{self, Debug};
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::player::{PlayerBackend, PlayerHandle, PlayerOptions, PlayerTarget};
use super::video_id::extract_video_id;
use crate::error::EmbedError;

pub const IFRAME_API_URL: &str = "https://www.youtube.com/iframe_api";

/// A loaded player runtime that can instantiate players.
pub trait PlayerRuntime: Send + Sync + Debug {
    fn create_player(
        &self,
        target: &PlayerTarget,
        options: &PlayerOptions,
    ) -> Result<Arc<dyn PlayerBackend>, EmbedError>;
}

/// Loads a [`PlayerRuntime`]. Called at most once per [`SharedRuntime`].
#[async_trait]
pub trait RuntimeLoader: Send + Sync + Debug {
    async fn load(&self) -> Result<Arc<dyn PlayerRuntime>, EmbedError>;
}

type RuntimeResult = Result<Arc<dyn PlayerRuntime>, EmbedError>;

/// Caches the runtime load: the first caller starts it, every caller
/// (concurrent or later) observes the same success or the same failure.
pub struct SharedRuntime {
    loader: Arc<dyn RuntimeLoader>,
    load: OnceCell<Shared<BoxFuture<'static, RuntimeResult>>>,
}

impl Debug for SharedRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRuntime")
            .field("loader", &self.loader)
            .field("started", &self.is_started())
            .finish()
    }
}

impl SharedRuntime {
    pub fn new(loader: Arc<dyn RuntimeLoader>) -> Self {
        Self {
            loader,
            load: OnceCell::new(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.load.get().is_some()
    }

    pub async fn get(&self) -> RuntimeResult {
        let load = self
            .load
            .get_or_init(|| {
                let loader = Arc::clone(&self.loader);
                debug!("loading player runtime");
                async move { loader.load().await }.boxed().shared()
            })
            .clone();
        load.await
    }
}

static IFRAME_RUNTIME: Lazy<SharedRuntime> =
    Lazy::new(|| SharedRuntime::new(Arc::new(IframeApiLoader::default())));

/// Process-wide runtime backed by [`IframeApiLoader`].
pub fn shared_iframe_runtime() -> &'static SharedRuntime {
    &IFRAME_RUNTIME
}

/// Attach a muted, looping background video to `container`.
///
/// The container is checked before anything is loaded. On failure callers
/// keep whatever static image they already show.
pub async fn attach_background_video(
    runtime: &SharedRuntime,
    container: Option<&PlayerTarget>,
    video: &str,
    origin: Option<&str>,
) -> Result<PlayerHandle, EmbedError> {
    let target = container.ok_or(EmbedError::ContainerMissing)?;
    let video_id = extract_video_id(video)
        .ok_or_else(|| EmbedError::InvalidVideoId(video.to_string()))?;

    let player_runtime = runtime.get().await?;
    let options = PlayerOptions::background(&video_id, origin);
    let backend = player_runtime.create_player(target, &options)?;

    let handle = PlayerHandle::new(backend, options);
    handle.on_ready();
    debug!(%video_id, container = %target.container_id, "background video attached");
    Ok(handle)
}

/// Fetches the iframe player API script once over HTTP.
#[derive(Debug, Clone)]
pub struct IframeApiLoader {
    http: Client,
    script_url: String,
}

impl Default for IframeApiLoader {
    fn default() -> Self {
        Self::new(Client::new(), IFRAME_API_URL)
    }
}

impl IframeApiLoader {
    pub fn new(http: Client, script_url: impl Into<String>) -> Self {
        Self {
            http,
            script_url: script_url.into(),
        }
    }
}

#[async_trait]
impl RuntimeLoader for IframeApiLoader {
    async fn load(&self) -> Result<Arc<dyn PlayerRuntime>, EmbedError> {
        let unavailable = |detail: String| {
            warn!(url = %self.script_url, %detail, "player runtime failed to load");
            EmbedError::RuntimeUnavailable(detail)
        };

        let response = self
            .http
            .get(&self.script_url)
            .send()
            .await
            .map_err(|err| unavailable(err.to_string()))?;
        if !response.status().is_success() {
            return Err(unavailable(format!("status {}", response.status())));
        }
        let script = response
            .text()
            .await
            .map_err(|err| unavailable(err.to_string()))?;
        if script.trim().is_empty() {
            return Err(unavailable("empty script".to_string()));
        }

        info!(bytes = script.len(), "player runtime loaded");
        Ok(Arc::new(EmbedRuntime {
            script_len: script.len(),
        }))
    }
}

/// Runtime produced by [`IframeApiLoader`]; its players are embed URLs whose
/// playback state is tracked locally.
#[derive(Debug)]
pub struct EmbedRuntime {
    script_len: usize,
}

impl EmbedRuntime {
    pub fn script_len(&self) -> usize {
        self.script_len
    }
}

impl PlayerRuntime for EmbedRuntime {
    fn create_player(
        &self,
        target: &PlayerTarget,
        options: &PlayerOptions,
    ) -> Result<Arc<dyn PlayerBackend>, EmbedError> {
        let embed_url = options
            .embed_url()
            .map_err(|err| EmbedError::RuntimeUnavailable(err.to_string()))?;
        Ok(Arc::new(EmbedPlayer {
            target: target.clone(),
            embed_url: embed_url.to_string(),
            status: Mutex::new(EmbedPlayerStatus::default()),
        }))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedPlayerStatus {
    pub muted: bool,
    pub playing: bool,
    pub quality: Option<String>,
}

#[derive(Debug)]
pub struct EmbedPlayer {
    target: PlayerTarget,
    embed_url: String,
    status: Mutex<EmbedPlayerStatus>,
}

impl EmbedPlayer {
    pub fn target(&self) -> &PlayerTarget {
        &self.target
    }

    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    pub fn status(&self) -> EmbedPlayerStatus {
        self.status.lock().clone()
    }
}

impl PlayerBackend for EmbedPlayer {
    fn mute(&self) {
        self.status.lock().muted = true;
    }

    fn play(&self) {
        self.status.lock().playing = true;
    }

    fn set_playback_quality(&self, quality: &str) {
        self.status.lock().quality = Some(quality.to_string());
    }
}
