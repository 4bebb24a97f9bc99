//! Core graph structure — fixed vertex set with sorted per-vertex adjacency.

use crate::types::{
    Edge, GraphError, GraphResult, Neighbor, SortOrder, VertexId, Weight, UNIT_WEIGHT,
};

/// An in-memory graph over vertices `0..vertex_count`.
///
/// Each vertex owns a list of outgoing [`Neighbor`] entries kept sorted by
/// ascending neighbor ID, with no duplicates. An undirected edge is stored as
/// two mirrored entries but counts once in [`Graph::edge_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Adjacency lists, indexed by vertex ID.
    adjacency: Vec<Vec<Neighbor>>,
    /// Number of logical edges.
    edge_count: usize,
    /// Whether `insert_edge` mirrors into the destination's list.
    directed: bool,
    /// Whether caller-supplied weights are kept (otherwise forced to 1).
    weighted: bool,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize, directed: bool, weighted: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
            directed,
            weighted,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Insert an edge `u -> v`, mirrored as `v -> u` on undirected graphs.
    ///
    /// Returns `Ok(false)` if `v` is already a neighbor of `u`; the existing
    /// weight is kept.
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> GraphResult<bool> {
        self.validate_pair(u, v)?;
        let weight = self.effective_weight(weight);

        if !self.insert_entry(u, v, weight) {
            return Ok(false);
        }
        if !self.directed {
            self.insert_entry(v, u, weight);
        }
        self.edge_count += 1;
        log::debug!("inserted edge {} -> {} (weight {})", u, v, weight);
        Ok(true)
    }

    /// Insert a one-way edge `u -> v`, even on an undirected graph.
    pub fn insert_directed_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> GraphResult<bool> {
        self.validate_pair(u, v)?;
        let weight = self.effective_weight(weight);

        if !self.insert_entry(u, v, weight) {
            return Ok(false);
        }
        self.edge_count += 1;
        log::debug!("inserted directed edge {} -> {} (weight {})", u, v, weight);
        Ok(true)
    }

    /// Remove the edge `u -> v` (and `v -> u` on undirected graphs).
    ///
    /// Returns `Ok(false)` if the edge was not present.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.validate_pair(u, v)?;

        if !self.remove_entry(u, v) {
            return Ok(false);
        }
        if !self.directed {
            self.remove_entry(v, u);
        }
        self.edge_count -= 1;
        log::debug!("removed edge {} -> {}", u, v);
        Ok(true)
    }

    /// Check whether `v` is an outgoing neighbor of `u`.
    pub fn edge_exists(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.validate_pair(u, v)?;
        Ok(self.position(u, v).is_ok())
    }

    /// Weight of the edge `u -> v`, if present.
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> GraphResult<Option<Weight>> {
        self.validate_pair(u, v)?;
        Ok(self
            .position(u, v)
            .ok()
            .map(|idx| self.adjacency[u][idx].weight))
    }

    /// Outgoing neighbors of `v`, sorted by ascending vertex ID.
    pub fn neighbors(&self, v: VertexId) -> GraphResult<&[Neighbor]> {
        self.validate_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Read-only view of every vertex's adjacency list.
    pub fn adjacency(&self) -> &[Vec<Neighbor>] {
        &self.adjacency
    }

    /// Enumerate logical edges, by origin then destination.
    ///
    /// Undirected graphs report each edge once (`origin < destination`);
    /// directed graphs report every stored entry.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (origin, list) in self.adjacency.iter().enumerate() {
            for entry in list {
                if self.directed || origin < entry.vertex {
                    edges.push(Edge::new(origin, entry.vertex, entry.weight));
                }
            }
        }
        edges
    }

    /// Logical edges sorted by weight. Equal weights keep enumeration order.
    pub fn sorted_edges(&self, order: SortOrder) -> Vec<Edge> {
        let mut edges = self.edges();
        match order {
            SortOrder::Ascending => edges.sort_by(|a, b| a.weight.cmp(&b.weight)),
            SortOrder::Descending => edges.sort_by(|a, b| b.weight.cmp(&a.weight)),
        }
        edges
    }

    /// Validate a single vertex ID.
    pub fn validate_vertex(&self, v: VertexId) -> GraphResult<()> {
        if v >= self.vertex_count() {
            log::warn!(
                "invalid vertex {} (graph has {} vertices)",
                v,
                self.vertex_count()
            );
            return Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }

    /// Validate the endpoints of an edge: both in range and distinct.
    pub fn validate_pair(&self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.validate_vertex(u)?;
        self.validate_vertex(v)?;
        if u == v {
            log::warn!("rejected self-loop on vertex {}", u);
            return Err(GraphError::SelfLoop(u));
        }
        Ok(())
    }

    fn effective_weight(&self, weight: Weight) -> Weight {
        if self.weighted {
            weight
        } else {
            UNIT_WEIGHT
        }
    }

    /// Index of `v` in `u`'s list, or the insertion point that keeps it sorted.
    fn position(&self, u: VertexId, v: VertexId) -> Result<usize, usize> {
        self.adjacency[u].binary_search_by_key(&v, |n| n.vertex)
    }

    fn insert_entry(&mut self, u: VertexId, v: VertexId, weight: Weight) -> bool {
        match self.position(u, v) {
            Ok(_) => false,
            Err(idx) => {
                self.adjacency[u].insert(idx, Neighbor::new(v, weight));
                true
            }
        }
    }

    fn remove_entry(&mut self, u: VertexId, v: VertexId) -> bool {
        match self.position(u, v) {
            Ok(idx) => {
                self.adjacency[u].remove(idx);
                true
            }
            Err(_) => false,
        }
    }
}
