//! Local vs remote decision, made once per node before any key is touched.

use std::collections::BTreeSet;

use gb_01_role_definitions::{NodeDefinition, NormalizedSeed, RoleSet};
use shared_types::Verkey;

use crate::error::KeyMaterialError;

/// How the keys of one node are obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKeyPlan {
    /// This machine runs the node: generate and persist private keys.
    Local { seed: NormalizedSeed },
    /// Another machine runs the node: only public data is needed.
    Remote { verkey: Verkey },
}

impl NodeKeyPlan {
    /// Plan for `node` given the set of node indices run on this machine.
    pub fn for_node(node: &NodeDefinition, local_indices: &BTreeSet<usize>) -> Self {
        if local_indices.contains(&node.index()) {
            NodeKeyPlan::Local {
                seed: node.seed().clone(),
            }
        } else {
            NodeKeyPlan::Remote {
                verkey: node.verkey().clone(),
            }
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, NodeKeyPlan::Local { .. })
    }
}

/// Every local index must name an existing node slot.
pub fn validate_local_indices(
    local_indices: &BTreeSet<usize>,
    node_count: usize,
) -> Result<(), KeyMaterialError> {
    match local_indices
        .iter()
        .find(|&&index| index == 0 || index > node_count)
    {
        Some(&index) => Err(KeyMaterialError::LocalIndexOutOfRange { index, node_count }),
        None => Ok(()),
    }
}

/// One plan per node, in node order.
pub fn resolve_plans(
    roles: &RoleSet,
    local_indices: &BTreeSet<usize>,
) -> Result<Vec<NodeKeyPlan>, KeyMaterialError> {
    validate_local_indices(local_indices, roles.node_count())?;
    Ok(roles
        .nodes
        .iter()
        .map(|node| NodeKeyPlan::for_node(node, local_indices))
        .collect())
}
