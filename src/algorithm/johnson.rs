//! Johnson's reweighting and the all-pairs distance matrix.
//!
//! A virtual source with zero-weight edges to every vertex seeds Bellman-Ford,
//! whose distances become the potential `h`. Each edge `(u, v, w)` is then
//! reweighted to `w + h[u] - h[v]`, which is non-negative, so Dijkstra can run
//! from every vertex. A reweighted distance `d'(s, t)` maps back to
//! `d'(s, t) - h[s] + h[t]`.

use std::fmt::{self, Debug, Display};
use log::{debug, error};
use num_traits::{Float, Zero};

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::{Graph, WeightedDigraph};
use crate::{Error, Result};

/// Reweighted copy of a graph together with the potential used to build it
#[derive(Debug, Clone)]
pub struct Reweighting<W>
where
    W: Float + Zero + Debug + Copy,
{
    graph: WeightedDigraph<W>,
    potentials: Vec<W>,
}

impl<W> Reweighting<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes the potential of `graph` and its reweighted copy.
    ///
    /// Returns `Ok(None)` when the graph contains a negative cycle.
    pub fn compute(graph: &WeightedDigraph<W>) -> Result<Option<Self>> {
        let (augmented, virtual_source) = graph.with_virtual_source();
        let outcome = BellmanFord::new().run(&augmented, virtual_source)?;
        if outcome.has_negative_cycle {
            error!(
                "graph with {} vertices contains a negative-weight cycle",
                graph.vertex_count()
            );
            return Ok(None);
        }

        let mut potentials = outcome.distances;
        potentials.truncate(graph.vertex_count());

        let reweighted = graph.map_weights(|u, e| e.weight + potentials[u] - potentials[e.dest]);
        debug!(
            "reweighted {} edges over {} vertices",
            reweighted.edge_count(),
            reweighted.vertex_count()
        );

        Ok(Some(Reweighting {
            graph: reweighted,
            potentials,
        }))
    }

    /// The reweighted graph; every edge weight is non-negative
    pub fn graph(&self) -> &WeightedDigraph<W> {
        &self.graph
    }

    /// Potential `h[v]` for every original vertex
    pub fn potentials(&self) -> &[W] {
        &self.potentials
    }

    /// Runs Dijkstra from `source` on the reweighted graph and maps the row
    /// back to original weights.
    pub fn distances_from(&self, source: usize) -> Result<Vec<W>> {
        if source >= self.potentials.len() {
            return Err(Error::InvalidVertex(source));
        }

        let mut row = Dijkstra::new().distances_from(&self.graph, source);
        self.restore_row(source, &mut row);
        Ok(row)
    }

    /// Undoes the reweighting for one row, leaving unreachable entries infinite
    fn restore_row(&self, source: usize, row: &mut [W]) {
        let h_source = self.potentials[source];
        for (d, &h_target) in row.iter_mut().zip(&self.potentials) {
            if *d != W::infinity() {
                *d = *d - h_source + h_target;
            }
        }
    }
}

/// Dense `V x V` distance matrix, `W::infinity()` marks unreachable pairs
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    rows: Vec<Vec<W>>,
}

impl<W> DistanceMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an `n x n` matrix with every entry infinite
    pub fn unreachable(n: usize) -> Self {
        DistanceMatrix {
            rows: vec![vec![W::infinity(); n]; n],
        }
    }

    /// Wraps precomputed rows; the matrix must be square
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().position(|row| row.len() != n) {
            return Err(Error::AlgorithmError(format!(
                "row {} has {} entries, expected {}",
                bad,
                rows[bad].len(),
                n
            )));
        }
        Ok(DistanceMatrix { rows })
    }

    /// Number of vertices (rows)
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Distance from `from` to `to`, `None` if unreachable or out of range
    pub fn get(&self, from: usize, to: usize) -> Option<W> {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|d| !d.is_infinite())
    }

    /// Raw row including infinite entries, `None` if `from` is out of range
    pub fn row(&self, from: usize) -> Option<&[W]> {
        self.rows.get(from).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<W>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<W>> {
        self.rows
    }

    /// True when no pair is reachable
    pub fn is_all_unreachable(&self) -> bool {
        self.rows.iter().flatten().all(|d| d.is_infinite())
    }
}

impl<W> Display for DistanceMatrix<W>
where
    W: Float + Zero + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for d in row {
                if d.is_infinite() {
                    write!(f, "INF\t")?;
                } else {
                    write!(f, "{}\t", d)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// All-pairs outcome.
///
/// A negative cycle is not an error here: the matrix is all infinite and
/// `negative_cycle` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub distances: DistanceMatrix<W>,
    pub negative_cycle: bool,
}

impl<W> AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// All-infinite `n x n` result reported for a negative cycle
    pub fn degenerate(n: usize) -> Self {
        AllPairsResult {
            distances: DistanceMatrix::unreachable(n),
            negative_cycle: true,
        }
    }

    pub fn solved(distances: DistanceMatrix<W>) -> Self {
        AllPairsResult {
            distances,
            negative_cycle: false,
        }
    }

    /// Converts the degenerate case into [`Error::NegativeCycle`]
    pub fn into_result(self) -> Result<DistanceMatrix<W>> {
        if self.negative_cycle {
            Err(Error::NegativeCycle)
        } else {
            Ok(self.distances)
        }
    }
}
