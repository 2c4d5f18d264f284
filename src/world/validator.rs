use std::collections::HashSet;
use std::rc::Rc;

use super::model::RoomRef;
use crate::maze::Maze;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Reports structural problems without rejecting the maze.
///
/// Mazes built over an external topology legitimately fail some of these
/// checks; callers decide what to do with the findings.
pub fn validate_maze(maze: &Maze) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if maze.is_empty() {
        errors.push(ValidationError::new("maze has no rooms"));
    }

    let is_member = |room: &RoomRef| maze.rooms().iter().any(|r| Rc::ptr_eq(r, room));

    match maze.entry_room() {
        None => errors.push(ValidationError::new("maze has no entry room")),
        Some(entry) if !is_member(&entry) => errors.push(ValidationError::new(format!(
            "entry room '{}' is not part of the maze",
            entry.borrow().name()
        ))),
        Some(_) => {}
    }

    if let Some(winning) = maze.winning_room() {
        if !is_member(&winning) {
            errors.push(ValidationError::new(format!(
                "winning room '{}' is not part of the maze",
                winning.borrow().name()
            )));
        }
    }

    // Validate exits
    for room in maze.rooms() {
        let room = room.borrow();
        for (direction, target) in room.exits() {
            match target.upgrade() {
                None => errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets a room that no longer exists",
                    room.name(),
                    direction
                ))),
                Some(target) if !is_member(&target) => {
                    errors.push(ValidationError::new(format!(
                        "room '{}' exit '{}' leads outside the maze to '{}'",
                        room.name(),
                        direction,
                        target.borrow().name()
                    )))
                }
                Some(_) => {}
            }
        }
    }

    // Lookup returns the last match, so earlier rooms with the same name are unreachable by name
    let mut seen: HashSet<String> = HashSet::new();
    let mut reported: HashSet<String> = HashSet::new();
    for room in maze.rooms() {
        let name = room.borrow().name().to_string();
        if !seen.insert(name.clone()) && reported.insert(name.clone()) {
            errors.push(ValidationError::new(format!(
                "room name '{}' is used more than once; lookup returns the last one",
                name
            )));
        }
    }

    errors
}
