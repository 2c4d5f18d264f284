mod default;

use std::rc::Rc;

use tracing::{debug, trace};

use crate::world::{Room, RoomRef};

/// The room graph of one game session.
///
/// Owns the canonical list of rooms and tracks where the player starts, where
/// the game is won and where the player currently is. Rooms link to each other
/// without owning each other, so the maze (or the caller, for rooms it never
/// inserted) keeps them alive.
#[derive(Debug)]
pub struct Maze {
    rooms: Vec<RoomRef>,
    current_room: Option<RoomRef>,
    entry_room: Option<RoomRef>,
    winning_room: Option<RoomRef>,
}

impl Maze {
    /// Builds the default five-room maze, starting in the "Atrio" and won in the
    /// "Biblioteca".
    pub fn new() -> Self {
        default::build()
    }

    /// Picks entry and winning room without building any topology.
    ///
    /// The room list stays empty: rooms reachable from `entry` are only those
    /// the caller already linked, and [`Maze::find_room`] finds nothing until
    /// rooms are added with [`Maze::add_room`].
    pub fn with_entry_and_winning(entry: RoomRef, winning: RoomRef) -> Self {
        debug!(
            entry = %entry.borrow().name(),
            winning = %winning.borrow().name(),
            "maze created over an external topology"
        );
        Maze {
            rooms: Vec::new(),
            current_room: Some(Rc::clone(&entry)),
            entry_room: Some(entry),
            winning_room: Some(winning),
        }
    }

    /// Builds a maze from up to three rooms, inserted in argument order.
    ///
    /// Rooms are not deduplicated: the same room passed twice is stored twice.
    /// With every argument `None` the maze is empty and has no current room.
    pub fn from_rooms(
        first: Option<RoomRef>,
        entry: Option<RoomRef>,
        winning: Option<RoomRef>,
    ) -> Self {
        let mut maze = Maze::empty();

        if let Some(room) = first {
            maze.rooms.push(room);
        }
        if let Some(room) = entry {
            maze.entry_room = Some(Rc::clone(&room));
            maze.current_room = Some(Rc::clone(&room));
            maze.rooms.push(room);
        }
        if let Some(room) = winning {
            maze.winning_room = Some(Rc::clone(&room));
            maze.rooms.push(room);
        }

        debug!(rooms = maze.rooms.len(), "maze created from rooms");
        maze
    }

    fn empty() -> Self {
        Maze {
            rooms: Vec::new(),
            current_room: None,
            entry_room: None,
            winning_room: None,
        }
    }

    /// Used by the file loader once every room is built and linked.
    pub(crate) fn from_parts(
        rooms: Vec<RoomRef>,
        entry: RoomRef,
        winning: Option<RoomRef>,
    ) -> Self {
        Maze {
            rooms,
            current_room: Some(Rc::clone(&entry)),
            entry_room: Some(entry),
            winning_room: winning,
        }
    }

    /// Appends a room to the maze. Names are not checked for uniqueness.
    pub fn add_room(&mut self, room: RoomRef) {
        trace!(room = %room.borrow().name(), "room added");
        self.rooms.push(room);
    }

    /// Finds the room sharing `target`'s name.
    ///
    /// When several rooms share the name the most recently inserted one wins.
    pub fn find_room(&self, target: &Room) -> Option<RoomRef> {
        self.find_room_by_name(target.name())
    }

    pub fn find_room_by_name(&self, name: &str) -> Option<RoomRef> {
        let found = self
            .rooms
            .iter()
            .rev()
            .find(|r| r.borrow().name() == name)
            .cloned();

        if found.is_none() {
            trace!(room = %name, "room not found");
        }
        found
    }

    /// `None` only for a maze built without an entry room.
    pub fn current_room(&self) -> Option<RoomRef> {
        self.current_room.clone()
    }

    /// Moves the player. Any room is accepted, inserted in the maze or not.
    pub fn set_current_room(&mut self, room: RoomRef) {
        trace!(room = %room.borrow().name(), "current room changed");
        self.current_room = Some(room);
    }

    pub fn entry_room(&self) -> Option<RoomRef> {
        self.entry_room.clone()
    }

    pub fn winning_room(&self) -> Option<RoomRef> {
        self.winning_room.clone()
    }

    /// True once the player stands in the winning room itself.
    pub fn is_won(&self) -> bool {
        match (&self.current_room, &self.winning_room) {
            (Some(current), Some(winning)) => Rc::ptr_eq(current, winning),
            _ => false,
        }
    }

    /// Rooms in insertion order.
    pub fn rooms(&self) -> &[RoomRef] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}
