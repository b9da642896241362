//! Background video embedding.

pub mod player;
pub mod runtime;
pub mod video_id;

pub use player::{
    PlaybackState, PlayerBackend, PlayerHandle, PlayerOptions, PlayerTarget,
    PlayerVars,
};
pub use runtime::{
    EmbedRuntime, IframeApiLoader, PlayerRuntime, RuntimeLoader, SharedRuntime,
    attach_background_video, shared_iframe_runtime,
};
pub use video_id::extract_video_id;
