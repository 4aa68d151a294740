use super::shapes::polygon::PolygonCmd;

/// A recorded draw. New shapes add a variant here, a payload under
/// `scene::shapes` and a renderer under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
}
