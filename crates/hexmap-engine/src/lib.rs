//! Window, GPU and input plumbing for the hex map.
//!
//! [`window::Runtime`] owns the winit event loop and one window with its
//! [`device::Gpu`]; an application implements [`core::App`], records
//! [`scene::DrawList`]s and replays them with the renderers in [`render`].

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
