use super::{DrawCmd, ZIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub cmd: DrawCmd,
}

/// One frame's draw commands.
///
/// Recording is append-only. Paint order is computed lazily with a stable
/// sort on the layer, so ties keep recording order; the index buffer is
/// reused across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    paint_order: Vec<usize>,
    paint_order_valid: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all commands, keeping capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.paint_order.clear();
        self.paint_order_valid = false;
    }

    /// Commands in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        self.items.push(DrawItem { z, cmd });
        self.paint_order_valid = false;
    }

    /// Back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if !self.paint_order_valid {
            let items = &self.items;
            self.paint_order.clear();
            self.paint_order.extend(0..items.len());
            self.paint_order.sort_by_key(|&i| items[i].z);
            self.paint_order_valid = true;
        }
        self.paint_order.iter().map(|&i| &self.items[i])
    }
}
