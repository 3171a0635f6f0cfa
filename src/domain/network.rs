//! Interest co-occurrence graph
//!
//! Nodes are interests weighted by how many records hold them. Two interests are linked
//! when the number of records holding both exceeds a fixed fraction of the smaller
//! node's popularity. Pair counts are accumulated in one pass over the records, so the
//! cost is O(n·k²) for k interests but with k² bit tests per record rather than k²
//! scans of the whole population.

use crate::domain::config_types::{CenterLabel, OverlapRatio};
use crate::domain::interests::Interest;
use crate::domain::user::UserRecord;
use serde::{Deserialize, Serialize};

/// Which interests become nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeScope {
    /// One node per vocabulary tag, even when nobody holds it
    #[default]
    Vocabulary,
    /// Only tags held by at least one record
    Observed,
}

/// Graph construction options
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkOptions {
    pub overlap_ratio: OverlapRatio,
    pub center: Option<CenterLabel>,
    pub scope: NodeScope,
}

/// Individual and pairwise interest counts over a population
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCounts {
    popularity: [usize; Interest::COUNT],
    shared: [[usize; Interest::COUNT]; Interest::COUNT],
}

impl PairCounts {
    pub fn from_records(records: &[UserRecord]) -> Self {
        let mut popularity = [0; Interest::COUNT];
        let mut shared = [[0; Interest::COUNT]; Interest::COUNT];
        for record in records {
            let held: Vec<usize> = record.interests.iter().map(Interest::index).collect();
            for (position, &a) in held.iter().enumerate() {
                popularity[a] += 1;
                for &b in &held[position + 1..] {
                    shared[a][b] += 1;
                    shared[b][a] += 1;
                }
            }
        }
        Self { popularity, shared }
    }

    pub fn popularity(&self, interest: Interest) -> usize {
        self.popularity[interest.index()]
    }

    /// Records holding both interests; symmetric, and zero on the diagonal
    pub fn shared(&self, a: Interest, b: Interest) -> usize {
        if a == b {
            return 0;
        }
        self.shared[a.index()][b.index()]
    }

    /// Whether a pair clears the relative overlap threshold
    ///
    /// A pair involving an interest nobody holds never links.
    pub fn links(&self, a: Interest, b: Interest, ratio: OverlapRatio) -> bool {
        let smaller = self.popularity(a).min(self.popularity(b));
        if a == b || smaller == 0 {
            return false;
        }
        self.shared(a, b) as f64 > ratio.into_inner() * smaller as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestNode {
    pub interest: Interest,
    pub popularity: usize,
}

/// An undirected edge, stored once with `source` before `target` in vocabulary order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoOccurrenceEdge {
    pub source: Interest,
    pub target: Interest,
    pub shared: usize,
}

impl CoOccurrenceEdge {
    pub fn touches(&self, interest: Interest) -> bool {
        self.source == interest || self.target == interest
    }

    /// The endpoint opposite `interest`, if the edge touches it
    pub fn other(&self, interest: Interest) -> Option<Interest> {
        if self.source == interest {
            Some(self.target)
        } else if self.target == interest {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Synthetic hub node linked to every interest node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenterNode {
    pub label: CenterLabel,
    pub total_records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestGraph {
    pub nodes: Vec<InterestNode>,
    pub edges: Vec<CoOccurrenceEdge>,
    pub center: Option<CenterNode>,
}

impl InterestGraph {
    pub fn build(records: &[UserRecord], options: &NetworkOptions) -> Self {
        let counts = PairCounts::from_records(records);

        let nodes: Vec<InterestNode> = Interest::ALL
            .into_iter()
            .map(|interest| InterestNode {
                interest,
                popularity: counts.popularity(interest),
            })
            .filter(|node| options.scope == NodeScope::Vocabulary || node.popularity > 0)
            .collect();

        let mut edges = Vec::new();
        for (position, a) in nodes.iter().enumerate() {
            for b in &nodes[position + 1..] {
                if counts.links(a.interest, b.interest, options.overlap_ratio) {
                    edges.push(CoOccurrenceEdge {
                        source: a.interest,
                        target: b.interest,
                        shared: counts.shared(a.interest, b.interest),
                    });
                }
            }
        }

        let center = options.center.clone().map(|label| CenterNode {
            label,
            total_records: records.len(),
        });

        Self {
            nodes,
            edges,
            center,
        }
    }

    pub fn edge_between(&self, a: Interest, b: Interest) -> Option<&CoOccurrenceEdge> {
        self.edges
            .iter()
            .find(|edge| edge.touches(a) && edge.other(a) == Some(b))
    }

    /// The strongest links of an interest, heaviest first
    pub fn top_connections(&self, interest: Interest, limit: usize) -> Vec<(Interest, usize)> {
        let mut connections: Vec<(Interest, usize)> = self
            .edges
            .iter()
            .filter_map(|edge| edge.other(interest).map(|other| (other, edge.shared)))
            .collect();
        connections.sort_by(|a, b| b.1.cmp(&a.1));
        connections.truncate(limit);
        connections
    }

    /// The `{nodes, links}` document consumed by the network chart
    pub fn to_document(&self) -> NetworkDocument {
        let mut nodes: Vec<DocumentNode> = self
            .nodes
            .iter()
            .map(|node| DocumentNode {
                id: node.interest.to_string(),
                value: node.popularity as f64,
            })
            .collect();
        let mut links: Vec<DocumentLink> = self
            .edges
            .iter()
            .map(|edge| DocumentLink {
                source: edge.source.to_string(),
                target: edge.target.to_string(),
                value: edge.shared as f64,
            })
            .collect();

        if let Some(center) = &self.center {
            nodes.push(DocumentNode {
                id: center.label.to_string(),
                value: center.total_records as f64,
            });
            links.extend(self.nodes.iter().map(|node| DocumentLink {
                source: center.label.to_string(),
                target: node.interest.to_string(),
                value: node.popularity as f64,
            }));
        }

        NetworkDocument { nodes, links }
    }
}

/// Graph document as stored in `interest_network.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub nodes: Vec<DocumentNode>,
    pub links: Vec<DocumentLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub value: f64,
}
