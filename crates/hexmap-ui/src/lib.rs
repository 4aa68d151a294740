//! HexMap: an interactive hex-grid visualizer on top of `hexmap-engine`.
//!
//! Left-click places a tile or cycles its color, left-drag pans, right-drag
//! rotates around the window center, the wheel zooms and a middle click resets
//! the view.
//!
//! ```rust,ignore
//! use hexmap_ui::Application;
//!
//! Application::new().title("HexMap").run()?;
//! ```
//!
//! Everything except [`Application`] is headless and can be driven directly:
//!
//! ```rust,ignore
//! let mut map = HexMap::default();
//! map.resize(Viewport::new(1200.0, 1000.0));
//! map.apply(MapAction::Click(Vec2::new(600.0, 500.0)));
//! ```

pub mod app;
pub mod config;
pub mod controller;
pub mod grid;
pub mod hex;
pub mod layout;
pub mod map;
pub mod palette;
pub mod view;

pub use app::Application;
pub use config::MapConfig;
pub use controller::{Gesture, InputController, MapAction};
pub use grid::{HexGrid, Tile};
pub use hex::{FractionalHex, Hex};
pub use layout::{Layout, Orientation};
pub use map::HexMap;
pub use palette::{Palette, Rgb};
pub use view::ViewTransform;
