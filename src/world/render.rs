use super::model::Room;

/// Text shown to the player on entering a room: name, exits, then items.
pub fn describe_room(room: &Room) -> String {
    let mut desc = String::new();
    desc.push_str(room.name());

    // exits to rooms that no longer exist are not shown
    let dirs: Vec<&str> = room
        .directions()
        .filter(|d| room.adjacent(*d).is_some())
        .map(|d| d.label())
        .collect();

    if dirs.is_empty() {
        desc.push_str("\nExits: (none)");
    } else {
        desc.push_str(&format!("\nExits: {}", dirs.join(", ")));
    }

    if room.items().is_empty() {
        desc.push_str("\nItems: (none)");
    } else {
        let list = room
            .items()
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        desc.push_str(&format!("\nItems: {}", list));
    }

    desc
}
