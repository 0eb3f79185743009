//! Inbound port: what the bootstrap runtime calls.

use std::collections::BTreeSet;

use gb_01_role_definitions::{NodeDefinition, RoleSet};

use crate::domain::{resolve_plans, NodeKeyPlan, NodeKeys};
use crate::error::KeyMaterialError;

/// Turns node definitions into registrable key material.
pub trait KeyMaterializerApi {
    /// Keys for one node under an already-resolved plan.
    fn materialize(
        &self,
        node: &NodeDefinition,
        plan: &NodeKeyPlan,
    ) -> Result<NodeKeys, KeyMaterialError>;

    /// Keys for every node, in node order. Stops at the first failure.
    fn materialize_all(
        &self,
        roles: &RoleSet,
        local_indices: &BTreeSet<usize>,
    ) -> Result<Vec<NodeKeys>, KeyMaterialError> {
        let plans = resolve_plans(roles, local_indices)?;
        roles
            .nodes
            .iter()
            .zip(plans.iter())
            .map(|(node, plan)| self.materialize(node, plan))
            .collect()
    }
}
