pub mod add_node_use_case;
pub mod list_nodes_use_case;
pub mod lookup_key_use_case;
pub mod remove_node_use_case;
pub mod reweight_node_use_case;

pub use add_node_use_case::AddNodeUseCase;
pub use list_nodes_use_case::ListNodesUseCase;
pub use lookup_key_use_case::LookupKeyUseCase;
pub use remove_node_use_case::RemoveNodeUseCase;
pub use reweight_node_use_case::ReweightNodeUseCase;

use crate::core::domain::models::AppError;

pub(crate) fn require(value: &str, what: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{what} is empty")));
    }

    Ok(())
}
