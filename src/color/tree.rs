//! A static k-d tree over a palette, answering "which palette color is
//! closest to this pixel".
//!
//! Nodes live in a single arena with children stored as indices. The tree
//! is built once by recursive median partition (axes cycling red, green,
//! blue) and never changes afterwards, so a built tree can be queried from
//! any number of threads at once.

use log::debug;

use super::distance::{squared_distance, squared_plane_distance, Distance};
use super::error::PaletteError;
use super::rgb::{Axis, PaletteEntry, Rgb};

const ROOT: usize = 0;

#[derive(Clone, Debug)]
struct TreeNode {
    entry: PaletteEntry,
    axis: Axis,
    left: Option<usize>,
    right: Option<usize>,
}

/// The closest palette entry to a query color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Match {
    pub entry: PaletteEntry,
    pub distance: Distance,
}

#[derive(Clone, Debug)]
pub struct PaletteTree {
    // Never empty; the root is always the first node pushed.
    nodes: Vec<TreeNode>,
}

impl PaletteTree {
    /// Builds a tree from an unordered palette.
    pub fn build(entries: impl Into<Vec<PaletteEntry>>) -> Result<Self, PaletteError> {
        let mut entries = entries.into();
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self::construct(&mut entries))
    }

    /// Builds a tree from a fixed-size table, rejecting empty tables at
    /// compile time.
    pub fn from_array<const N: usize>(mut entries: [PaletteEntry; N]) -> Self {
        const { assert!(N > 0, "a palette tree needs at least one entry") };
        Self::construct(&mut entries)
    }

    fn construct(entries: &mut [PaletteEntry]) -> Self {
        let mut nodes = Vec::with_capacity(entries.len());
        let root = build_subtree(&mut nodes, entries, 0);
        debug_assert_eq!(root, Some(ROOT));

        let tree = Self { nodes };
        debug!(
            "built palette tree: {} entries, depth {}",
            tree.len(),
            tree.depth()
        );
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.walk_depth_first(|_, _, depth| deepest = deepest.max(depth + 1));
        deepest
    }

    /// Finds the palette entry closest to `target`.
    ///
    /// When two entries are equally close, whichever the traversal reaches
    /// first wins.
    pub fn nearest(&self, target: Rgb) -> Match {
        let root = &self.nodes[ROOT];
        let mut best = Match {
            entry: root.entry,
            distance: squared_distance(target, root.entry.color),
        };
        self.search(ROOT, target, &mut best);
        best
    }

    /// Shorthand for [`nearest`](Self::nearest) returning only the id.
    #[inline]
    pub fn nearest_color(&self, red: u8, green: u8, blue: u8) -> u8 {
        self.nearest(Rgb::new(red, green, blue)).entry.id
    }

    fn search(&self, index: usize, target: Rgb, best: &mut Match) {
        let node = &self.nodes[index];
        let split = node.entry.color;

        let (near, far) = if target.channel(node.axis) < split.channel(node.axis) {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, target, best);
        }

        let distance = squared_distance(target, split);
        if distance < best.distance {
            *best = Match {
                entry: node.entry,
                distance,
            };
        }

        // Everything beyond the splitting plane is at least this far away.
        if let Some(far) = far {
            if squared_plane_distance(target, split, node.axis) < best.distance {
                self.search(far, target, best);
            }
        }
    }

    /// Visits every node in pre-order with its split axis and depth (root = 0).
    pub fn walk_depth_first<F>(&self, mut visit: F)
    where
        F: FnMut(&PaletteEntry, Axis, usize),
    {
        self.walk(ROOT, 0, &mut visit);
    }

    fn walk<F>(&self, index: usize, depth: usize, visit: &mut F)
    where
        F: FnMut(&PaletteEntry, Axis, usize),
    {
        let node = &self.nodes[index];
        visit(&node.entry, node.axis, depth);
        if let Some(left) = node.left {
            self.walk(left, depth + 1, visit);
        }
        if let Some(right) = node.right {
            self.walk(right, depth + 1, visit);
        }
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &PaletteEntry> + '_ {
        self.nodes.iter().map(|node| &node.entry)
    }
}

fn build_subtree(
    nodes: &mut Vec<TreeNode>,
    entries: &mut [PaletteEntry],
    depth: usize,
) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }

    let axis = Axis::from_depth(depth);
    entries.sort_by_key(|entry| entry.color.channel(axis));

    let median = entries.len() / 2;
    let index = nodes.len();
    nodes.push(TreeNode {
        entry: entries[median],
        axis,
        left: None,
        right: None,
    });

    let (lesser, rest) = entries.split_at_mut(median);
    let greater = &mut rest[1..];
    let left = build_subtree(nodes, lesser, depth + 1);
    let right = build_subtree(nodes, greater, depth + 1);

    let node = &mut nodes[index];
    node.left = left;
    node.right = right;
    Some(index)
}
