#[derive(Debug)]
pub struct LookupKeyUseCaseInput {
    pub pool: String,
    pub key: String,
    /// Distinct owners wanted; 1 is a plain lookup.
    pub replicas: usize,
}

#[derive(Debug)]
pub struct LookupKeyUseCaseOutput {
    /// Primary owner first.
    pub node_ids: Vec<String>,
}
