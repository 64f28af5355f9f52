// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The connection graph of a feasible labeling.
//!
//! Nodes are the instances of the pool in problem order, edges the wired
//! endpoint pairs labeled with their interface models. A graph produced by
//! the solver is always connected.

use crate::index::InstanceIndex;
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;
use troupe_core::collections::disjoint_set::RollbackDisjointSet;
use troupe_model::model::ResourceModel;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionNode {
    model: ResourceModel,
    ordinal: usize,
}

impl ConnectionNode {
    #[inline]
    pub fn new(model: ResourceModel, ordinal: usize) -> Self {
        Self { model, ordinal }
    }

    #[inline]
    pub fn model(&self) -> &ResourceModel {
        &self.model
    }

    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl std::fmt::Display for ConnectionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.model.fragment(), self.ordinal)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionEdge {
    source: InstanceIndex,
    source_interface: ResourceModel,
    target: InstanceIndex,
    target_interface: ResourceModel,
}

impl ConnectionEdge {
    #[inline]
    pub fn new(
        source: InstanceIndex,
        source_interface: ResourceModel,
        target: InstanceIndex,
        target_interface: ResourceModel,
    ) -> Self {
        Self {
            source,
            source_interface,
            target,
            target_interface,
        }
    }

    #[inline]
    pub fn source(&self) -> InstanceIndex {
        self.source
    }

    #[inline]
    pub fn target(&self) -> InstanceIndex {
        self.target
    }

    #[inline]
    pub fn source_interface(&self) -> &ResourceModel {
        &self.source_interface
    }

    #[inline]
    pub fn target_interface(&self) -> &ResourceModel {
        &self.target_interface
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionGraph {
    nodes: Vec<ConnectionNode>,
    edges: Vec<ConnectionEdge>,
}

impl ConnectionGraph {
    #[inline]
    pub fn new(nodes: Vec<ConnectionNode>, edges: Vec<ConnectionEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Snapshot of the wiring currently held by `state`.
    pub fn from_state(problem: &ConnectivityProblem, state: &SearchState) -> Self {
        let nodes = problem
            .instances()
            .iter()
            .map(|i| ConnectionNode::new(i.model().clone(), i.ordinal()))
            .collect();
        let edges = state
            .connections()
            .map(|(a, b)| {
                ConnectionEdge::new(
                    problem.endpoint_instance(a),
                    problem.endpoint_model(a).clone(),
                    problem.endpoint_instance(b),
                    problem.endpoint_model(b).clone(),
                )
            })
            .collect();
        Self { nodes, edges }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[ConnectionNode] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[ConnectionEdge] {
        &self.edges
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: InstanceIndex) -> usize {
        self.edges
            .iter()
            .filter(|e| e.source == node || e.target == node)
            .count()
    }

    /// Returns `true` if every node is reachable from every other. Graphs
    /// with fewer than two nodes are connected.
    pub fn is_connected(&self) -> bool {
        let mut set = RollbackDisjointSet::new(self.nodes.len());
        for e in &self.edges {
            set.union(e.source.get(), e.target.get());
        }
        set.components() <= 1
    }
}

impl std::fmt::Display for ConnectionGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConnectionGraph(nodes: [")?;
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "], edges: [")?;
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{}.{} -- {}.{}",
                self.nodes[e.source.get()],
                e.source_interface.fragment(),
                self.nodes[e.target.get()],
                e.target_interface.fragment()
            )?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::decision::Decision;
    use crate::problem::ConnectivityProblemBuilder;
    use crate::trail::SearchTrail;

    #[test]
    fn test_from_state_collects_edges_once() {
        let mut b = ConnectivityProblemBuilder::new();
        let x = b.add_instance("Rover");
        let y = b.add_instance("Dock");
        let plug = b.add_interface(x, "Plug");
        let socket = b.add_interface(y, "Socket");
        b.add_compatibility("Plug", "Socket");
        let p = b.build();

        let mut s = SearchState::new(p.num_instances(), p.num_endpoints());
        let mut t = SearchTrail::new();
        t.push_frame();
        t.apply(&mut s, &p, Decision::connect(socket, plug));

        let g = ConnectionGraph::from_state(&p, &s);
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.num_edges(), 1);
        assert!(g.is_connected());
        assert_eq!(g.edges()[0].source(), x);
        assert_eq!(g.edges()[0].source_interface().as_str(), "Plug");
        assert_eq!(g.degree(y), 1);
        assert_eq!(
            format!("{}", g),
            "ConnectionGraph(nodes: [Rover#0, Dock#0], edges: [Rover#0.Plug -- Dock#0.Socket])"
        );
    }

    #[test]
    fn test_connectedness() {
        let nodes = vec![
            ConnectionNode::new("A".into(), 0),
            ConnectionNode::new("A".into(), 1),
            ConnectionNode::new("B".into(), 0),
        ];
        let disconnected = ConnectionGraph::new(
            nodes.clone(),
            vec![ConnectionEdge::new(
                InstanceIndex::new(0),
                "Plug".into(),
                InstanceIndex::new(1),
                "Socket".into(),
            )],
        );
        assert!(!disconnected.is_connected());
        assert!(ConnectionGraph::default().is_connected());
        assert!(ConnectionGraph::new(nodes[..1].to_vec(), Vec::new()).is_connected());
    }
}
