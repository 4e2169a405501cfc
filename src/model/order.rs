//! Column order - the user's left-to-right arrangement of visible columns
//!
//! Both operations are pure: they take a sequence and return a new one.

use super::column::ColumnRegistry;
use super::visibility::VisibilitySet;

/// Bring `order` back in line with `visible`.
///
/// Ids no longer visible (or repeated) are dropped. Ids that are visible
/// but missing are inserted right after their nearest registry predecessor
/// already in the sequence, or at the front when there is none. Without
/// intervening drags this restores registry order exactly.
pub fn reconcile(
    order: &[String],
    visible: &VisibilitySet,
    registry: &ColumnRegistry,
) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(visible.len());
    for id in order {
        if visible.contains(id) && !result.contains(id) {
            result.push(id.clone());
        }
    }

    // Visible ids in declaration order
    let declared: Vec<&str> = visible.project(registry).iter().map(|c| c.id).collect();
    for (position, id) in declared.iter().enumerate() {
        if result.iter().any(|r| r == id) {
            continue;
        }
        let anchor = declared[..position]
            .iter()
            .rev()
            .find_map(|prev| result.iter().position(|r| r == prev));
        let insert_at = anchor.map_or(0, |i| i + 1);
        log::debug!("Reconcile: inserting '{}' at {}", id, insert_at);
        result.insert(insert_at, id.to_string());
    }

    result
}

/// Move `source` to the slot `target` occupies.
///
/// Standard array-move: the source is removed, then reinserted at the
/// target's original index. Returns the input unchanged when the ids are
/// equal or either is absent.
pub fn move_column(order: &[String], source: &str, target: &str) -> Vec<String> {
    if source == target {
        return order.to_vec();
    }
    let (Some(from), Some(to)) = (
        order.iter().position(|id| id == source),
        order.iter().position(|id| id == target),
    ) else {
        log::debug!("Move ignored: '{}' -> '{}' not both present", source, target);
        return order.to_vec();
    };

    let mut result = order.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    result
}
