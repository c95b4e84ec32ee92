/// Dense vertex identifier, assigned in insertion order starting at 0.
pub type VertexId = usize;

/// Directed graph with labeled vertices and at most one labeled edge per
/// ordered vertex pair.
///
/// Vertex identifiers index directly into internal storage, so vertex
/// lookups are O(1). Edge lookups scan the source vertex's outgoing edges,
/// which are kept in insertion order so iteration (and therefore search
/// tie-breaking) is deterministic.
#[derive(Debug, Clone)]
pub struct LabeledGraph<V, E> {
    vertices: Vec<V>,
    adjacency: Vec<Vec<(VertexId, E)>>,
    edge_count: usize,
}

impl<V, E> LabeledGraph<V, E> {
    /// An empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Insert a vertex and return its identifier.
    pub fn add_vertex(&mut self, label: V) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(label);
        self.adjacency.push(Vec::new());
        id
    }

    /// Label of vertex `v`, if it exists.
    pub fn vertex(&self, v: VertexId) -> Option<&V> {
        self.vertices.get(v)
    }

    /// Iterate over `(id, label)` for every vertex in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices.iter().enumerate()
    }

    /// Insert or replace the edge `from -> to`, returning the label it
    /// replaced.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not a vertex of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, label: E) -> Option<E> {
        assert!(to < self.vertices.len(), "edge target {to} is not a vertex");
        let edges = &mut self.adjacency[from];
        if let Some(slot) = edges.iter_mut().find(|(target, _)| *target == to) {
            return Some(std::mem::replace(&mut slot.1, label));
        }
        edges.push((to, label));
        self.edge_count += 1;
        None
    }

    /// Label of the edge `from -> to`, if present.
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&E> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, label)| label)
    }

    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge(from, to).is_some()
    }

    /// Outgoing edges of `v` as `(target, label)` pairs. Empty for unknown
    /// vertices.
    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, &E)> + '_ {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|(target, label)| (*target, label))
    }
}

impl<V, E> Default for LabeledGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
