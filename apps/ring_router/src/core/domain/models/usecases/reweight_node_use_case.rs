#[derive(Debug)]
pub struct ReweightNodeUseCaseInput {
    pub pool: String,
    pub node_id: String,
    pub weight: u32,
}

#[derive(Debug)]
pub struct ReweightNodeUseCaseOutput {
    pub success: bool,
}
