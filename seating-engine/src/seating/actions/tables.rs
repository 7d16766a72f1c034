//! Table-level actions: clearing, adding and editing table metadata

use crate::seating::traits::{ActionContext, ActionError, ActionHandler, ActionResult};
use shared::seating::{Arrangement, SkipReason};
use shared::util::parse_positive;

/// Send every guest at one table back to the pool
#[derive(Debug, Clone)]
pub struct ClearTableAction {
    pub table_index: usize,
}

impl ActionHandler for ClearTableAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.require_table(self.table_index)?;
        if ctx.arrangement.tables[self.table_index].is_empty() {
            return Err(ActionError::Skip(SkipReason::TableEmpty));
        }
        let members = std::mem::take(&mut ctx.arrangement.tables[self.table_index]);
        let count = members.len();
        ctx.arrangement.pool.extend(members);
        Ok(format!(
            "Clear {} ({} guests)",
            ctx.arrangement.alias(self.table_index),
            count
        ))
    }
}

/// Send every seated guest back to the pool
#[derive(Debug, Clone)]
pub struct ClearAllTablesAction;

impl ActionHandler for ClearAllTablesAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let seated = ctx.arrangement.seated_count();
        if seated == 0 {
            return Err(ActionError::Skip(SkipReason::TableEmpty));
        }
        let Arrangement { pool, tables, .. } = &mut *ctx.arrangement;
        for members in tables.iter_mut() {
            pool.append(members);
        }
        Ok(format!("Clear all tables ({} guests)", seated))
    }
}

/// Append an empty table with default metadata
#[derive(Debug, Clone)]
pub struct AddTableAction;

impl ActionHandler for AddTableAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let index = ctx.arrangement.table_count();
        let size = ctx.default_table_size;
        let arrangement = &mut *ctx.arrangement;
        arrangement.tables.push(Vec::new());
        arrangement
            .table_aliases
            .insert(index, Arrangement::default_alias(index));
        arrangement.table_numbers.insert(index, index as u32 + 1);
        arrangement.table_sizes.insert(index, size);
        Ok(format!("Add {}", Arrangement::default_alias(index)))
    }
}

/// Rename a table; an empty alias restores the default
#[derive(Debug, Clone)]
pub struct SetTableAliasAction {
    pub table_index: usize,
    pub alias: String,
}

impl ActionHandler for SetTableAliasAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.require_table(self.table_index)?;
        let old = ctx.arrangement.alias(self.table_index);
        let alias = self.alias.trim();
        let new = if alias.is_empty() {
            Arrangement::default_alias(self.table_index)
        } else {
            alias.to_string()
        };
        if new == old {
            return Err(ActionError::Skip(SkipReason::Unchanged));
        }

        if alias.is_empty() {
            ctx.arrangement.table_aliases.remove(&self.table_index);
        } else {
            ctx.arrangement
                .table_aliases
                .insert(self.table_index, new.clone());
        }
        Ok(format!("Rename {} to {}", old, new))
    }
}

/// Set a table's display number from raw input
#[derive(Debug, Clone)]
pub struct SetTableNumberAction {
    pub table_index: usize,
    pub value: String,
}

impl ActionHandler for SetTableNumberAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.require_table(self.table_index)?;
        let number = parse_positive(&self.value)
            .ok_or(ActionError::Skip(SkipReason::InvalidValue))?;
        if ctx.arrangement.number(self.table_index) == number {
            return Err(ActionError::Skip(SkipReason::Unchanged));
        }
        ctx.arrangement.table_numbers.insert(self.table_index, number);
        Ok(format!(
            "Set {} number to {}",
            ctx.arrangement.alias(self.table_index),
            number
        ))
    }
}

/// Set a table's capacity from raw input
///
/// Shrinking below the current membership is allowed; the table is then
/// reported as oversized.
#[derive(Debug, Clone)]
pub struct SetTableCapacityAction {
    pub table_index: usize,
    pub value: String,
}

impl ActionHandler for SetTableCapacityAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.require_table(self.table_index)?;
        let capacity = parse_positive(&self.value)
            .ok_or(ActionError::Skip(SkipReason::InvalidValue))?;
        if ctx.arrangement.capacity(self.table_index, ctx.default_table_size) == capacity {
            return Err(ActionError::Skip(SkipReason::Unchanged));
        }
        ctx.arrangement.table_sizes.insert(self.table_index, capacity);
        Ok(format!(
            "Set {} capacity to {}",
            ctx.arrangement.alias(self.table_index),
            capacity
        ))
    }
}
