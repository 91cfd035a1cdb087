//! Pure functions for calculating deployment plans (Functional Core).

use std::collections::HashMap;

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployPlan {
    /// Tables that don't exist and need to be created.
    pub create: Vec<TableConfig>,
    /// Tables that already exist.
    pub unchanged: Vec<String>,
    /// Tables still being deleted; they can be created once deletion finishes.
    pub deleting: Vec<String>,
}

/// Plan for destroying the tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestroyPlan {
    /// Tables that exist and will be deleted.
    pub delete: Vec<String>,
    /// Tables that don't exist or are already being deleted.
    pub already_gone: Vec<String>,
}

impl DeployPlan {
    pub fn has_changes(&self) -> bool {
        !self.create.is_empty()
    }

    /// Whether every desired table exists and is not being deleted.
    pub fn is_up_to_date(&self) -> bool {
        self.create.is_empty() && self.deleting.is_empty()
    }
}

impl DestroyPlan {
    pub fn has_changes(&self) -> bool {
        !self.delete.is_empty()
    }
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(
    current: &HashMap<String, TableState>,
    desired: &[TableConfig],
) -> DeployPlan {
    let mut plan = DeployPlan::default();
    for table in desired {
        match current.get(&table.table_name).map(|state| state.status) {
            Some(TableStatus::Deleting) => plan.deleting.push(table.table_name.clone()),
            Some(_) => plan.unchanged.push(table.table_name.clone()),
            None => plan.create.push(table.clone()),
        }
    }
    plan
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(
    current: &HashMap<String, TableState>,
    desired: &[TableConfig],
) -> DestroyPlan {
    let mut plan = DestroyPlan::default();
    for table in desired {
        match current.get(&table.table_name).map(|state| state.status) {
            Some(TableStatus::Deleting) | None => {
                plan.already_gone.push(table.table_name.clone())
            }
            Some(_) => plan.delete.push(table.table_name.clone()),
        }
    }
    plan
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    let mut lines = Vec::new();
    for config in &plan.create {
        lines.push(format!("+ Create table: {}", config.table_name));
        lines.push(format!("  Partition key: {} (S)", config.partition_key.name));
        lines.push("  Billing: PAY_PER_REQUEST".to_string());
    }
    for table_name in &plan.unchanged {
        lines.push(format!("= Table '{}' is up to date", table_name));
    }
    for table_name in &plan.deleting {
        lines.push(format!(
            "! Table '{}' is being deleted, rerun deploy once it is gone",
            table_name
        ));
    }
    lines
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    let mut lines = Vec::new();
    for table_name in &plan.delete {
        lines.push(format!(
            "- Delete table: {} (ALL DATA WILL BE LOST)",
            table_name
        ));
    }
    for table_name in &plan.already_gone {
        lines.push(format!("= Table '{}' does not exist", table_name));
    }
    lines
}
