#[derive(Debug)]
pub struct RemoveNodeUseCaseInput {
    pub pool: String,
    pub node_id: String,
}

#[derive(Debug)]
pub struct RemoveNodeUseCaseOutput {
    pub success: bool,
}
