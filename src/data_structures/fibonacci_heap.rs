use std::collections::HashMap;
use std::fmt::Debug;

use crate::{Error, Result};

/// Index of a node slot in the heap arena
type NodeId = usize;

/// A node of the Fibonacci heap.
///
/// Siblings form a circular doubly-linked list through `left`/`right`. A node
/// alone in its list links to itself.
#[derive(Debug, Clone)]
struct Node<P> {
    vertex: usize,
    key: P,
    parent: Option<NodeId>,
    child: Option<NodeId>,
    left: NodeId,
    right: NodeId,
    degree: usize,
    mark: bool,
}

/// Min-priority queue keyed by vertex with amortized O(1) decrease-key.
///
/// Implements the classic Fibonacci heap:
/// - Insert: O(1) amortized, the new node joins the root list
/// - DecreaseKey: O(1) amortized, using cut and cascading cut
/// - ExtractMin: O(log n) amortized, followed by consolidation of equal-degree roots
///
/// Nodes live in an arena and link to each other by index. Slots freed by
/// `extract_min` are recycled by later inserts.
#[derive(Debug)]
pub struct FibonacciHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Node arena
    nodes: Vec<Node<P>>,

    /// Recycled arena slots
    free: Vec<NodeId>,

    /// Vertex -> live node
    index: HashMap<usize, NodeId>,

    /// Root with the smallest key
    min: Option<NodeId>,

    /// Number of live nodes
    len: usize,
}

impl<P> Default for FibonacciHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FibonacciHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            min: None,
            len: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        FibonacciHeap {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            min: None,
            len: 0,
        }
    }

    /// Returns true if the heap holds no vertices
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of vertices in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if `vertex` was inserted and not yet extracted
    pub fn contains(&self, vertex: usize) -> bool {
        self.index.contains_key(&vertex)
    }

    /// Current key of a vertex still in the heap
    pub fn key_of(&self, vertex: usize) -> Option<P> {
        self.index.get(&vertex).map(|&id| self.nodes[id].key)
    }

    /// Returns the minimum `(vertex, key)` without removing it
    pub fn peek_min(&self) -> Option<(usize, P)> {
        self.min.map(|id| (self.nodes[id].vertex, self.nodes[id].key))
    }

    /// Adds a vertex with the given key.
    ///
    /// Each vertex may be present at most once.
    pub fn insert(&mut self, vertex: usize, key: P) -> Result<()> {
        if self.index.contains_key(&vertex) {
            return Err(Error::DuplicateVertex(vertex));
        }

        let node = Node {
            vertex,
            key,
            parent: None,
            child: None,
            left: 0,
            right: 0,
            degree: 0,
            mark: false,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[id].left = id;
        self.nodes[id].right = id;

        self.index.insert(vertex, id);
        self.add_root(id);
        self.len += 1;
        Ok(())
    }

    /// Lowers the key of `vertex`.
    ///
    /// A `new_key` greater than the current key is ignored. Vertices that are
    /// not in the heap yield [`Error::UnknownVertex`].
    pub fn decrease_key(&mut self, vertex: usize, new_key: P) -> Result<()> {
        let x = *self
            .index
            .get(&vertex)
            .ok_or(Error::UnknownVertex(vertex))?;

        if new_key > self.nodes[x].key {
            return Ok(());
        }
        self.nodes[x].key = new_key;

        if let Some(y) = self.nodes[x].parent {
            if new_key < self.nodes[y].key {
                self.cut(x, y);
                self.cascading_cut(y);
            }
        }

        if let Some(m) = self.min {
            if new_key < self.nodes[m].key {
                self.min = Some(x);
            }
        }
        Ok(())
    }

    /// Removes and returns the vertex with the smallest key, `None` when empty
    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        let z = self.min?;

        // Promote every child of z to the root list
        let children = self.siblings(self.nodes[z].child);
        for child in children {
            self.add_root(child);
        }
        self.nodes[z].child = None;
        self.nodes[z].degree = 0;

        let right = self.nodes[z].right;
        if right == z {
            self.min = None;
        } else {
            self.unlink(z);
            self.min = Some(right);
            self.consolidate();
        }

        let Node { vertex, key, .. } = self.nodes[z];
        self.index.remove(&vertex);
        self.free.push(z);
        self.len -= 1;
        Some((vertex, key))
    }

    /// Collects a circular sibling list starting at `start`
    fn siblings(&self, start: Option<NodeId>) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Some(start) = start {
            let mut current = start;
            loop {
                out.push(current);
                current = self.nodes[current].right;
                if current == start {
                    break;
                }
            }
        }
        out
    }

    /// Inserts `x` immediately to the left of `anchor` in anchor's list
    fn splice_left_of(&mut self, anchor: NodeId, x: NodeId) {
        let left = self.nodes[anchor].left;
        self.nodes[x].right = anchor;
        self.nodes[x].left = left;
        self.nodes[left].right = x;
        self.nodes[anchor].left = x;
    }

    /// Removes `x` from its sibling list, leaving it self-linked
    fn unlink(&mut self, x: NodeId) {
        let Node { left, right, .. } = self.nodes[x];
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[x].left = x;
        self.nodes[x].right = x;
    }

    /// Puts `x` on the root list as a parentless, unmarked root
    fn add_root(&mut self, x: NodeId) {
        self.nodes[x].parent = None;
        self.nodes[x].mark = false;

        match self.min {
            None => {
                self.nodes[x].left = x;
                self.nodes[x].right = x;
                self.min = Some(x);
            }
            Some(m) => {
                self.splice_left_of(m, x);
                if self.nodes[x].key < self.nodes[m].key {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Makes root `y` a child of root `x`
    fn link(&mut self, y: NodeId, x: NodeId) {
        self.unlink(y);

        match self.nodes[x].child {
            None => self.nodes[x].child = Some(y),
            Some(child) => self.splice_left_of(child, y),
        }

        self.nodes[y].parent = Some(x);
        self.nodes[y].mark = false;
        self.nodes[x].degree += 1;
    }

    /// Merges roots of equal degree until every root degree is unique
    fn consolidate(&mut self) {
        // Max degree is O(log n); grow on demand if the estimate is short
        let bound = 2 * (usize::BITS - self.len.leading_zeros()) as usize + 1;
        let mut by_degree: Vec<Option<NodeId>> = vec![None; bound];

        for root in self.siblings(self.min) {
            let mut x = root;
            let mut d = self.nodes[x].degree;
            loop {
                if d >= by_degree.len() {
                    by_degree.resize(d + 1, None);
                }
                let Some(mut y) = by_degree[d].take() else {
                    break;
                };
                if self.nodes[y].key < self.nodes[x].key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }
            by_degree[d] = Some(x);
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.add_root(root);
        }
    }

    /// Moves `x` from the child list of `y` to the root list
    fn cut(&mut self, x: NodeId, y: NodeId) {
        if self.nodes[x].right == x {
            self.nodes[y].child = None;
        } else {
            if self.nodes[y].child == Some(x) {
                self.nodes[y].child = Some(self.nodes[x].right);
            }
            self.unlink(x);
        }
        self.nodes[y].degree -= 1;
        self.add_root(x);
    }

    /// Walks up from `y`, cutting marked ancestors until an unmarked one is marked
    fn cascading_cut(&mut self, mut y: NodeId) {
        while let Some(z) = self.nodes[y].parent {
            if !self.nodes[y].mark {
                self.nodes[y].mark = true;
                return;
            }
            self.cut(y, z);
            y = z;
        }
    }

    /// Checks the structural invariants, returning a description of the first
    /// violation found.
    ///
    /// Walks the whole forest; intended for tests and debugging.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let roots = self.siblings(self.min);
        let mut seen = 0usize;

        if let Some(m) = self.min {
            for &r in &roots {
                if self.nodes[r].parent.is_some() {
                    return Err(format!("root {} has a parent", self.nodes[r].vertex));
                }
                if self.nodes[r].mark {
                    return Err(format!("root {} is marked", self.nodes[r].vertex));
                }
                if self.nodes[r].key < self.nodes[m].key {
                    return Err(format!(
                        "min points at vertex {} but root {} has a smaller key",
                        self.nodes[m].vertex, self.nodes[r].vertex
                    ));
                }
            }
        }

        let mut stack = roots;
        while let Some(x) = stack.pop() {
            seen += 1;
            let node = &self.nodes[x];
            if self.nodes[node.left].right != x || self.nodes[node.right].left != x {
                return Err(format!("broken sibling links at vertex {}", node.vertex));
            }
            if self.index.get(&node.vertex) != Some(&x) {
                return Err(format!("vertex {} missing from index", node.vertex));
            }

            let children = self.siblings(node.child);
            if children.len() != node.degree {
                return Err(format!(
                    "vertex {} has degree {} but {} children",
                    node.vertex,
                    node.degree,
                    children.len()
                ));
            }
            for &c in &children {
                if self.nodes[c].parent != Some(x) {
                    return Err(format!("child {} has wrong parent", self.nodes[c].vertex));
                }
                if self.nodes[c].key < node.key {
                    return Err(format!(
                        "heap order violated between {} and child {}",
                        node.vertex, self.nodes[c].vertex
                    ));
                }
            }
            stack.extend(children);
        }

        if seen != self.len || self.index.len() != self.len {
            return Err(format!(
                "len is {} but forest has {} nodes and index {}",
                self.len,
                seen,
                self.index.len()
            ));
        }
        Ok(())
    }
}
