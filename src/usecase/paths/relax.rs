//! Edge relaxation shared by every shortest-path routine.

use crate::domain::adjacency::Edge;
use crate::domain::error::{GraphError, Result};
use crate::domain::graph::Graph;
use crate::domain::model::ShortestPathTree;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Distance sentinel for "not reached yet". Never produced by addition.
pub(crate) const UNREACHABLE: i64 = i64::MAX;

/// Sums two distances, keeping the sentinel absorbing so two "infinite"
/// entries never overflow into a finite value.
pub(crate) fn combine(a: i64, b: i64) -> i64 {
    if a == UNREACHABLE || b == UNREACHABLE {
        return UNREACHABLE;
    }
    a.saturating_add(b).min(UNREACHABLE - 1)
}

/// Tries to improve the tentative distance of `e.to` through `u`.
pub(crate) fn relax(dist: &mut [i64], pred: &mut [Option<usize>], u: usize, e: Edge) -> bool {
    let candidate = combine(dist[u], e.weight);
    if candidate < dist[e.to] {
        dist[e.to] = candidate;
        pred[e.to] = Some(u);
        true
    } else {
        false
    }
}

/// How the relaxation loop chooses what to relax next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Settle the closest frontier vertex first. Requires non-negative weights.
    PriorityDriven,
    /// Relax every edge this many times, then check once more for a negative cycle.
    FixedPasses(usize),
}

pub(crate) fn relax_from(graph: &Graph, source: usize, strategy: Relaxation) -> Result<ShortestPathTree> {
    let n = graph.vertex_count();
    let mut dist = vec![UNREACHABLE; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0;

    match strategy {
        Relaxation::PriorityDriven => priority_driven(graph, source, &mut dist, &mut pred),
        Relaxation::FixedPasses(passes) => fixed_passes(graph, passes, &mut dist, &mut pred)?,
    }

    Ok(ShortestPathTree {
        source,
        distance: dist
            .into_iter()
            .map(|d| (d != UNREACHABLE).then_some(d))
            .collect(),
        predecessor: pred,
    })
}

fn priority_driven(graph: &Graph, source: usize, dist: &mut [i64], pred: &mut [Option<usize>]) {
    let mut settled = vec![false; dist.len()];
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0i64, source)));

    while let Some(Reverse((d, u))) = frontier.pop() {
        // Stale entry: a shorter distance was pushed after this one.
        if settled[u] || d > dist[u] {
            continue;
        }
        settled[u] = true;

        for &e in graph.edges_from(u) {
            if !settled[e.to] && relax(dist, pred, u, e) {
                frontier.push(Reverse((dist[e.to], e.to)));
            }
        }
    }
}

fn fixed_passes(
    graph: &Graph,
    passes: usize,
    dist: &mut [i64],
    pred: &mut [Option<usize>],
) -> Result<()> {
    for _ in 0..passes {
        if !sweep(graph, dist, pred) {
            // Fixpoint reached early: the extra pass below could not relax anything.
            return Ok(());
        }
    }
    if sweep(graph, dist, pred) {
        return Err(GraphError::NegativeCycleDetected);
    }
    Ok(())
}

/// One relaxation pass over every stored edge. Returns whether anything improved.
fn sweep(graph: &Graph, dist: &mut [i64], pred: &mut [Option<usize>]) -> bool {
    let mut changed = false;
    for (u, outs) in graph.store().lists().iter().enumerate() {
        for &e in outs {
            changed |= relax(dist, pred, u, e);
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_keeps_unreachable_absorbing() {
        assert_eq!(combine(UNREACHABLE, UNREACHABLE), UNREACHABLE);
        assert_eq!(combine(UNREACHABLE, -5), UNREACHABLE);
        assert_eq!(combine(3, -5), -2);
        assert!(combine(i64::MAX - 1, 10) < UNREACHABLE);
    }

    #[test]
    fn relax_skips_unreached_sources() {
        let mut dist = vec![UNREACHABLE, UNREACHABLE];
        let mut pred = vec![None, None];
        assert!(!relax(&mut dist, &mut pred, 0, Edge::new(1, -3)));
        assert_eq!(dist[1], UNREACHABLE);
    }
}
