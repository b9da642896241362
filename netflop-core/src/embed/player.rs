//! Background player options and event handling.

use std::fmt::Debug;
use std::sync::Arc;

use url::Url;

pub const EMBED_HOST: &str = "https://www.youtube-nocookie.com";
pub const PINNED_QUALITY: &str = "hd1080";

/// Element the player fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTarget {
    pub container_id: String,
    pub width: String,
    pub height: String,
}

impl PlayerTarget {
    /// A target scaled to fill its container.
    pub fn fill(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            width: "100%".to_string(),
            height: "100%".to_string(),
        }
    }
}

/// Player parameters of a muted, looping, chrome-less background video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerVars {
    pub autoplay: bool,
    pub controls: bool,
    pub keyboard: bool,
    pub fullscreen: bool,
    pub related: bool,
    pub modest_branding: bool,
    pub plays_inline: bool,
    pub captions: bool,
    pub annotations: bool,
    pub loop_playback: bool,
    /// Looping needs a playlist made of the video itself.
    pub playlist: String,
    pub mute: bool,
    pub origin: Option<String>,
}

impl PlayerVars {
    pub fn background(video_id: &str, origin: Option<&str>) -> Self {
        Self {
            autoplay: true,
            controls: false,
            keyboard: false,
            fullscreen: false,
            related: false,
            modest_branding: true,
            plays_inline: true,
            captions: false,
            annotations: false,
            loop_playback: true,
            playlist: video_id.to_string(),
            mute: true,
            origin: origin.map(str::to_string),
        }
    }

    /// Embed query parameters, in the player's own vocabulary.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let flag = |on: bool| String::from(if on { "1" } else { "0" });
        let mut pairs = vec![
            ("autoplay", flag(self.autoplay)),
            ("controls", flag(self.controls)),
            ("disablekb", flag(!self.keyboard)),
            ("fs", flag(self.fullscreen)),
            ("rel", flag(self.related)),
            ("modestbranding", flag(self.modest_branding)),
            ("playsinline", flag(self.plays_inline)),
            ("cc_load_policy", flag(self.captions)),
            (
                "iv_load_policy",
                String::from(if self.annotations { "1" } else { "3" }),
            ),
            ("loop", flag(self.loop_playback)),
            ("playlist", self.playlist.clone()),
            ("mute", flag(self.mute)),
        ];
        if let Some(origin) = &self.origin {
            pairs.push(("origin", origin.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOptions {
    pub video_id: String,
    pub host: String,
    pub vars: PlayerVars,
}

impl PlayerOptions {
    pub fn background(video_id: &str, origin: Option<&str>) -> Self {
        Self {
            video_id: video_id.to_string(),
            host: EMBED_HOST.to_string(),
            vars: PlayerVars::background(video_id, origin),
        }
    }

    pub fn embed_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.host)?.join(&format!("embed/{}", self.video_id))?;
        url.query_pairs_mut().extend_pairs(self.vars.query_pairs());
        Ok(url)
    }
}

/// Player states reported by the embed runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlaybackState {
    /// Map the runtime's numeric state codes.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }
}

/// Controls of a created player instance.
pub trait PlayerBackend: Send + Sync + Debug {
    fn mute(&self);
    fn play(&self);
    fn set_playback_quality(&self, quality: &str);
}

/// A background player: keeps itself muted, looping and quality-pinned.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    backend: Arc<dyn PlayerBackend>,
    options: PlayerOptions,
}

impl PlayerHandle {
    pub fn new(backend: Arc<dyn PlayerBackend>, options: PlayerOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    pub fn backend(&self) -> &Arc<dyn PlayerBackend> {
        &self.backend
    }

    /// Autoplay only works muted.
    pub fn on_ready(&self) {
        self.backend.mute();
        self.backend.play();
        self.backend.set_playback_quality(PINNED_QUALITY);
    }

    pub fn on_state_change(&self, state: PlaybackState) {
        match state {
            PlaybackState::Ended => self.backend.play(),
            PlaybackState::Playing => self.backend.set_playback_quality(PINNED_QUALITY),
            _ => {}
        }
    }
}
