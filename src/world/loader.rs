use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use tracing::{info, warn};

use super::model::{Direction, Item, Room, RoomRef};
use super::validator::validate_maze;
use crate::error::MazeError;
use crate::maze::Maze;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct MazeFile {
    maze: MazeHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct MazeHeader {
    entry: String,
    #[serde(default)]
    winning: Option<String>,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    weight: u32,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a maze from a .toml file on disk.
pub fn load_maze_from_file(path: &Path) -> Result<Maze, MazeError> {
    let contents = fs::read_to_string(path)?;
    let maze = load_maze_from_str(&contents)?;
    info!(path = %path.display(), rooms = maze.len(), "maze loaded");
    Ok(maze)
}

/// Load a maze from TOML text.
///
/// Rooms are inserted in file order and exits are wired after every room
/// exists, so a room may lead to one declared further down.
pub fn load_maze_from_str(contents: &str) -> Result<Maze, MazeError> {
    let maze_file: MazeFile = toml::from_str(contents)?;

    if maze_file.maze.entry.trim().is_empty() {
        return Err(MazeError::invalid("maze.entry may not be empty"));
    }

    // Build rooms
    let mut rooms: Vec<RoomRef> = Vec::with_capacity(maze_file.room.len());
    let mut by_name: HashMap<String, RoomRef> = HashMap::new();

    for room_cfg in &maze_file.room {
        let name = room_cfg.name.trim();
        if name.is_empty() {
            return Err(MazeError::invalid("room name may not be empty"));
        }
        if by_name.contains_key(name) {
            return Err(MazeError::invalid(format!("Duplicate room name: {}", name)));
        }

        let mut room = Room::new(name);
        for ic in &room_cfg.item {
            if ic.name.trim().is_empty() {
                return Err(MazeError::invalid(format!(
                    "room '{}' has an item with an empty name",
                    name
                )));
            }
            room.add_item(Item::new(ic.name.trim(), ic.weight));
        }

        let room = Rc::new(RefCell::new(room));
        by_name.insert(name.to_string(), Rc::clone(&room));
        rooms.push(room);
    }

    // Wire exits
    for (room_cfg, room) in maze_file.room.iter().zip(&rooms) {
        for exit in &room_cfg.exit {
            let direction: Direction = exit.direction.parse()?;
            let target = by_name.get(exit.target.trim()).ok_or_else(|| {
                MazeError::invalid(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_cfg.name.trim(),
                    exit.direction,
                    exit.target
                ))
            })?;
            room.borrow_mut().set_adjacent(direction, target);
        }
    }

    let entry = lookup(&by_name, &maze_file.maze.entry, "entry")?;
    let winning = match &maze_file.maze.winning {
        Some(name) => Some(lookup(&by_name, name, "winning")?),
        None => None,
    };

    let maze = Maze::from_parts(rooms, entry, winning);

    for problem in validate_maze(&maze) {
        warn!("{}", problem.message);
    }

    Ok(maze)
}

fn lookup(
    by_name: &HashMap<String, RoomRef>,
    name: &str,
    field: &str,
) -> Result<RoomRef, MazeError> {
    by_name.get(name.trim()).cloned().ok_or_else(|| {
        MazeError::invalid(format!("maze.{} '{}' not found among rooms", field, name))
    })
}
