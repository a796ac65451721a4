use mazestep_core::GridLocation;

/// Stable index of a [`SearchNode`] within one search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Which list a discovered node currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeList {
    /// Discovered, waiting to be expanded.
    Open,
    /// Expanded; its cost is settled.
    Closed,
}

/// One discovered location of a search, with its costs and back-link.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub location: GridLocation,
    /// Accumulated cost from the start.
    pub g: f64,
    /// Estimated cost to the goal.
    pub h: f64,
    /// `g + h`, the expansion priority.
    pub f: f64,
    /// Node this one was reached from; `None` for the start node.
    pub parent: Option<NodeId>,
    pub list: NodeList,
}

impl SearchNode {
    pub(crate) fn new(location: GridLocation, g: f64, h: f64, parent: Option<NodeId>) -> Self {
        Self {
            location,
            g,
            h,
            f: g + h,
            parent,
            list: NodeList::Open,
        }
    }

    /// Overwrite the costs and parent after a rediscovery.
    pub(crate) fn reparent(&mut self, g: f64, h: f64, parent: NodeId) {
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.parent = Some(parent);
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.list == NodeList::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.list == NodeList::Closed
    }
}
