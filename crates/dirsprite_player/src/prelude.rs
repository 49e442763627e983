//! Prelude module for `dirsprite_player`.

#[doc(inline)]
pub use crate::export::{
	ExportError, ExportOutcome, ExportRequest, FixedPath, LogSink, NotificationSink,
	SavePathPicker, export_gif,
};

#[doc(inline)]
pub use crate::panel::{AnimationPanel, PanelSummary};

#[doc(inline)]
pub use crate::playback::{PlayMode, PlaybackState, Player, PlayerOptions, Status, Ticker};

#[doc(inline)]
pub use crate::texture::{TextureCache, TextureLoader};

#[doc(inline)]
pub use crate::view_state::{ViewState, ViewStateError};
