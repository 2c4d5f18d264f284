use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use crate::error::MazeError;

/// Shared handle to a room. Identity is `Rc::ptr_eq`, lookup identity is the name.
pub type RoomRef = Rc<RefCell<Room>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Label used by the game text ("nord", "sud", "est", "ovest").
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "nord",
            Direction::South => "sud",
            Direction::East => "est",
            Direction::West => "ovest",
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nord" | "north" => Ok(Direction::North),
            "sud" | "south" => Ok(Direction::South),
            "est" | "east" => Ok(Direction::East),
            "ovest" | "west" => Ok(Direction::West),
            _ => Err(MazeError::UnknownDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    weight: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Item {
            name: name.into(),
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}kg)", self.name, self.weight)
    }
}

/// A named node of the maze.
///
/// Exits do not keep their target alive: the maze (or whoever built the rooms)
/// owns them, so a dropped target simply reads back as no exit.
#[derive(Debug, Default)]
pub struct Room {
    name: String,
    exits: BTreeMap<Direction, Weak<RefCell<Room>>>,
    items: Vec<Item>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Convenience for `Rc::new(RefCell::new(Room::new(name)))`.
    pub fn shared(name: impl Into<String>) -> RoomRef {
        Rc::new(RefCell::new(Room::new(name)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces any previous exit in that direction.
    pub fn set_adjacent(&mut self, direction: Direction, room: &RoomRef) {
        self.exits.insert(direction, Rc::downgrade(room));
    }

    pub fn adjacent(&self, direction: Direction) -> Option<RoomRef> {
        self.exits.get(&direction).and_then(Weak::upgrade)
    }

    /// Directions with an exit set, in `Direction` order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.exits.keys().copied()
    }

    pub(crate) fn exits(&self) -> impl Iterator<Item = (Direction, &Weak<RefCell<Room>>)> + '_ {
        self.exits.iter().map(|(d, w)| (*d, w))
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.item(name).is_some()
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Removes the first item with that name.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.name == name)?;
        Some(self.items.remove(idx))
    }
}

/// One-way passage from `from` to `to`.
pub fn link(from: &RoomRef, direction: Direction, to: &RoomRef) {
    from.borrow_mut().set_adjacent(direction, to);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_both_label_sets() {
        assert_eq!("nord".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("East".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!(" ovest ".parse::<Direction>().unwrap(), Direction::West);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(MazeError::UnknownDirection(d)) if d == "up"
        ));
    }

    #[test]
    fn opposite_round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn link_is_one_way() {
        let a = Room::shared("a");
        let b = Room::shared("b");
        link(&a, Direction::East, &b);

        let east = a.borrow().adjacent(Direction::East).unwrap();
        assert!(Rc::ptr_eq(&east, &b));
        assert!(b.borrow().adjacent(Direction::West).is_none());
    }

    #[test]
    fn self_loop_is_allowed() {
        let a = Room::shared("a");
        link(&a, Direction::North, &a);
        let north = a.borrow().adjacent(Direction::North).unwrap();
        assert!(Rc::ptr_eq(&north, &a));
    }

    #[test]
    fn exit_to_dropped_room_reads_as_none() {
        let a = Room::shared("a");
        {
            let gone = Room::shared("gone");
            link(&a, Direction::South, &gone);
        }
        assert!(a.borrow().adjacent(Direction::South).is_none());
        assert_eq!(a.borrow().directions().count(), 1);
    }

    #[test]
    fn items_keep_insertion_order_and_remove_first_match() {
        let mut room = Room::new("store");
        room.add_item(Item::new("osso", 1));
        room.add_item(Item::new("lanterna", 3));
        room.add_item(Item::new("osso", 2));

        assert!(room.has_item("lanterna"));
        assert_eq!(room.item("osso").map(Item::weight), Some(1));

        let removed = room.remove_item("osso").unwrap();
        assert_eq!(removed.weight(), 1);
        assert_eq!(room.item("osso").map(Item::weight), Some(2));
        assert!(room.remove_item("spada").is_none());
    }

    #[test]
    fn item_display() {
        assert_eq!(Item::new("lanterna", 3).to_string(), "lanterna (3kg)");
    }
}
