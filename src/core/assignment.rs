//! Pure roster computation: which rooms need cleaning and who takes which.
//! No store or IO knowledge; everything here is deterministic in its inputs.

use crate::core::inventory::RoomInventory;
use crate::utils::error::{Result, RotaError};
use std::collections::HashSet;

/// Parses a comma-separated exclusion list into a set of room numbers.
///
/// Tokens are trimmed; empty tokens (and an empty input) contribute nothing.
/// A token that is not an integer fails the whole parse, so no partial
/// exclusion is ever applied. Integers that cannot name a room (negative,
/// oversized, or simply absent from the inventory) are inert rather than
/// errors.
pub fn parse_excluded_rooms(text: &str) -> Result<HashSet<u32>> {
    let mut excluded = HashSet::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|source| RotaError::InvalidRoomNumber {
                token: token.to_string(),
                source,
            })?;
        if let Ok(room) = u32::try_from(value) {
            excluded.insert(room);
        }
    }
    Ok(excluded)
}

/// Inventory minus exclusions, in inventory order (ascending by
/// construction). The ordering is a display contract, not an optimization.
pub fn rooms_to_clean(inventory: &RoomInventory, excluded: &HashSet<u32>) -> Vec<u32> {
    inventory
        .rooms()
        .iter()
        .copied()
        .filter(|room| !excluded.contains(room))
        .collect()
}

/// Round-robin: the room at index `i` lands in lane `i % lanes`. Lanes keep
/// their rooms in input order, so sorted input yields sorted lanes.
pub fn distribute_rooms(rooms: &[u32], lanes: usize) -> Vec<Vec<u32>> {
    if lanes == 0 {
        return Vec::new();
    }
    let mut buckets = vec![Vec::new(); lanes];
    for (i, room) in rooms.iter().enumerate() {
        buckets[i % lanes].push(*room);
    }
    buckets
}

/// Formats one `"<maid>: <room>, <room>"` line per maid. A maid without
/// rooms still gets a `"<maid>: "` line; downstream consumers rely on the
/// label always being present.
pub fn format_assignments(maids: &[String], buckets: &[Vec<u32>]) -> Vec<String> {
    maids
        .iter()
        .zip(buckets)
        .map(|(maid, rooms)| {
            let list = rooms
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", maid, list)
        })
        .collect()
}

/// The full computation: parse exclusions, derive the rooms to clean, and
/// split them evenly across the maids in input order.
///
/// With R rooms and M maids every maid receives `floor(R/M)` or
/// `ceil(R/M)` rooms, and the first `R mod M` maids take the extra one.
/// An empty maid list is rejected.
pub fn compute_assignment(
    inventory: &RoomInventory,
    maids: &[String],
    excluded_text: &str,
) -> Result<(Vec<u32>, Vec<String>)> {
    if maids.is_empty() {
        return Err(RotaError::NoMaids);
    }
    let excluded = parse_excluded_rooms(excluded_text)?;
    let rooms = rooms_to_clean(inventory, &excluded);
    let buckets = distribute_rooms(&rooms, maids.len());
    let assignments = format_assignments(maids, &buckets);
    Ok((rooms, assignments))
}
