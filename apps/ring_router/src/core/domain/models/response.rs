use crate::core::domain::models::NodeEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok,
    Node(String),
    /// Bare ids, as answered to `REPLICAS`.
    Nodes(Vec<String>),
    /// `id:weight` pairs, as answered to `NODES`.
    Members(Vec<NodeEntry>),
    Pools(Vec<String>),
    Hash(String),
    Bye,
    Error(String),
}

impl Response {
    pub fn to_wire(&self) -> String {
        match self {
            Response::Ok => "OK".to_string(),
            Response::Node(id) => format!("NODE {}", wire_token(id)),
            Response::Nodes(ids) => with_items("NODES", ids.iter().map(|id| wire_token(id))),
            Response::Members(nodes) => with_items(
                "MEMBERS",
                nodes
                    .iter()
                    .map(|n| format!("{}:{}", wire_token(&n.id), n.weight)),
            ),
            Response::Pools(pools) => with_items("POOLS", pools.iter().map(|p| wire_token(p))),
            Response::Hash(hash) => hash.clone(),
            Response::Bye => "BYE".to_string(),
            Response::Error(e) => format!("ERROR: {e}"),
        }
    }
}

/// Quotes tokens the line tokenizer would otherwise split or drop.
fn wire_token(token: &str) -> String {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        format!("\"{token}\"")
    } else {
        token.to_string()
    }
}

fn with_items(head: &str, items: impl Iterator<Item = String>) -> String {
    let mut out = head.to_string();
    for item in items {
        out.push(' ');
        out.push_str(&item);
    }
    out
}
