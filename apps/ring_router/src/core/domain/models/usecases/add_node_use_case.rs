#[derive(Debug)]
pub struct AddNodeUseCaseInput {
    pub pool: String,
    pub node_id: String,
    pub weight: u32,
}

#[derive(Debug)]
pub struct AddNodeUseCaseOutput {
    pub success: bool,
}
