use serde::{Deserialize, Serialize};

/// `_NET_WM_STATE` values a window can carry.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WindowState {
    Modal,
    Sticky,
    MaximizedVert,
    MaximizedHorz,
    Shaded,
    SkipTaskbar,
    SkipPager,
    Hidden,
    Fullscreen,
    Above,
    Below,
    DemandsAttention,
}

impl WindowState {
    /// States that exclude a window from tiling.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            Self::Modal
                | Self::Shaded
                | Self::SkipTaskbar
                | Self::SkipPager
                | Self::Hidden
                | Self::Fullscreen
                | Self::Above
                | Self::Below
        )
    }
}
