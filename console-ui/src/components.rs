pub mod active_cameras;
pub mod battlefield_map;
pub mod grid_reference;
pub mod navbar;
pub mod stats_panel;
pub mod styles;
pub mod video_feed;

pub use active_cameras::ActiveCameras;
pub use battlefield_map::BattlefieldMap;
pub use grid_reference::GridReference;
pub use navbar::Navbar;
pub use stats_panel::StatsPanel;
pub use video_feed::VideoFeed;
