use std::sync::OnceLock;

/// The fixed set of room numbers eligible for cleaning. Sorted ascending
/// and deduplicated at construction; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInventory {
    rooms: Vec<u32>,
}

impl RoomInventory {
    pub fn new(mut rooms: Vec<u32>) -> Self {
        rooms.sort_unstable();
        rooms.dedup();
        Self { rooms }
    }

    pub fn rooms(&self) -> &[u32] {
        &self.rooms
    }

    pub fn contains(&self, room: u32) -> bool {
        self.rooms.binary_search(&room).is_ok()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// The reference hotel layout: five floors, non-contiguous ranges.
/// Room 513 does not exist. Built once, never mutated.
pub fn default_inventory() -> &'static RoomInventory {
    static INVENTORY: OnceLock<RoomInventory> = OnceLock::new();
    INVENTORY.get_or_init(|| {
        let mut rooms: Vec<u32> = Vec::new();
        rooms.extend(101..=122);
        rooms.extend(201..=219);
        rooms.extend(301..=314);
        rooms.extend(401..=416);
        rooms.extend(501..=512);
        rooms.extend(514..=516);
        RoomInventory::new(rooms)
    })
}
