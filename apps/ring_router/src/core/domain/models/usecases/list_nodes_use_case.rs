use crate::core::domain::models::NodeEntry;

#[derive(Debug)]
pub struct ListNodesUseCaseInput {
    pub pool: String,
}

#[derive(Debug)]
pub struct ListNodesUseCaseOutput {
    pub nodes: Vec<NodeEntry>,
}
