#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        pool: String,
        node_id: String,
        weight: u32,
    },
    Remove {
        pool: String,
        node_id: String,
    },
    Reweight {
        pool: String,
        node_id: String,
        weight: u32,
    },
    Lookup {
        pool: String,
        key: String,
    },
    Replicas {
        pool: String,
        key: String,
        count: usize,
    },
    Nodes {
        pool: String,
    },
    Pools,
    Hash {
        key: String,
    },
    Quit,
    /// Known command with bad arguments; carries the usage line.
    Invalid(String),
    Unknown(String),
}
