pub mod add_node_use_case;
pub mod list_nodes_use_case;
pub mod lookup_key_use_case;
pub mod remove_node_use_case;
pub mod reweight_node_use_case;

pub use add_node_use_case::{AddNodeUseCaseInput, AddNodeUseCaseOutput};
pub use list_nodes_use_case::{ListNodesUseCaseInput, ListNodesUseCaseOutput};
pub use lookup_key_use_case::{LookupKeyUseCaseInput, LookupKeyUseCaseOutput};
pub use remove_node_use_case::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput};
pub use reweight_node_use_case::{ReweightNodeUseCaseInput, ReweightNodeUseCaseOutput};
