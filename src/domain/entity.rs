//! Core domain models for the relay server.

use std::collections::{HashMap, HashSet};

use super::value_object::{ConnectionId, RoomName, Timestamp};

/// A named, ephemeral group of connections.
///
/// Rooms hold no message history; membership is the only state.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room name (the key under which the room is tracked)
    pub name: RoomName,
    /// Connections currently in the room
    pub members: HashSet<ConnectionId>,
    /// Timestamp when the room was created (first join)
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new empty room
    pub fn new(name: RoomName, created_at: Timestamp) -> Self {
        Self {
            name,
            members: HashSet::new(),
            created_at,
        }
    }

    /// Add a member. Returns `false` if the connection was already a member.
    pub fn add_member(&mut self, member: ConnectionId) -> bool {
        self.members.insert(member)
    }

    /// Remove a member. Returns `false` if the connection was not a member.
    pub fn remove_member(&mut self, member: &ConnectionId) -> bool {
        self.members.remove(member)
    }

    /// Whether the room has no members left
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members in the room
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Members of the room other than `exclude`
    pub fn members_except(&self, exclude: &ConnectionId) -> Vec<ConnectionId> {
        self.members
            .iter()
            .filter(|member| *member != exclude)
            .cloned()
            .collect()
    }
}

/// Mapping from room name to room.
///
/// Rooms are created on first join and pruned as soon as their membership
/// becomes empty; a connection can belong to any number of rooms.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    rooms: HashMap<RoomName, Room>,
}

impl RoomDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Add `member` to the named room, creating the room on demand.
    ///
    /// Returns `false` if the connection was already a member (duplicate
    /// joins are idempotent).
    pub fn join(&mut self, name: RoomName, member: ConnectionId, now: Timestamp) -> bool {
        let room = self
            .rooms
            .entry(name.clone())
            .or_insert_with(|| Room::new(name, now));
        room.add_member(member)
    }

    /// Members of the named room other than `exclude`.
    ///
    /// Unknown rooms yield an empty list.
    pub fn members_except(&self, name: &RoomName, exclude: &ConnectionId) -> Vec<ConnectionId> {
        self.rooms
            .get(name)
            .map(|room| room.members_except(exclude))
            .unwrap_or_default()
    }

    /// Remove `member` from every room it belongs to, pruning rooms that
    /// become empty. Returns the names of the rooms that were left.
    pub fn leave_all(&mut self, member: &ConnectionId) -> Vec<RoomName> {
        let mut left = Vec::new();
        self.rooms.retain(|name, room| {
            if room.remove_member(member) {
                left.push(name.clone());
            }
            !room.is_empty()
        });
        left
    }

    /// Names of the rooms `member` currently belongs to
    pub fn rooms_of(&self, member: &ConnectionId) -> Vec<RoomName> {
        self.rooms
            .values()
            .filter(|room| room.members.contains(member))
            .map(|room| room.name.clone())
            .collect()
    }

    /// Whether a room with the given name currently exists
    pub fn contains(&self, name: &RoomName) -> bool {
        self.rooms.contains_key(name)
    }

    /// Number of members in the named room (0 for unknown rooms)
    pub fn member_count(&self, name: &RoomName) -> usize {
        self.rooms.get(name).map(Room::member_count).unwrap_or(0)
    }

    /// Number of live rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_name(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    fn connection_id(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    #[test]
    fn test_room_add_and_remove_member() {
        // given:
        let mut room = Room::new(room_name("lobby"), Timestamp::new(0));

        // when:
        let added = room.add_member(connection_id("a"));

        // then:
        assert!(added);
        assert_eq!(room.member_count(), 1);

        // when: removing the member again
        let removed = room.remove_member(&connection_id("a"));

        // then:
        assert!(removed);
        assert!(room.is_empty());
    }

    #[test]
    fn test_room_members_except_excludes_only_given_member() {
        // given:
        let mut room = Room::new(room_name("lobby"), Timestamp::new(0));
        room.add_member(connection_id("a"));
        room.add_member(connection_id("b"));
        room.add_member(connection_id("c"));

        // when:
        let others = room.members_except(&connection_id("a"));

        // then:
        assert_eq!(others.len(), 2);
        assert!(others.contains(&connection_id("b")));
        assert!(others.contains(&connection_id("c")));
        assert!(!others.contains(&connection_id("a")));
    }

    #[test]
    fn test_directory_join_creates_room_on_demand() {
        // given:
        let mut directory = RoomDirectory::new();
        assert!(!directory.contains(&room_name("lobby")));

        // when:
        let changed = directory.join(room_name("lobby"), connection_id("a"), Timestamp::new(0));

        // then:
        assert!(changed);
        assert!(directory.contains(&room_name("lobby")));
        assert_eq!(directory.member_count(&room_name("lobby")), 1);
    }

    #[test]
    fn test_directory_join_is_idempotent() {
        // given:
        let mut directory = RoomDirectory::new();
        directory.join(room_name("lobby"), connection_id("a"), Timestamp::new(0));

        // when: joining the same room again
        let changed = directory.join(room_name("lobby"), connection_id("a"), Timestamp::new(1));

        // then: membership size unchanged
        assert!(!changed);
        assert_eq!(directory.member_count(&room_name("lobby")), 1);
    }

    #[test]
    fn test_directory_membership_is_many_to_many() {
        // given:
        let mut directory = RoomDirectory::new();

        // when: one connection joins two rooms, another shares one of them
        directory.join(room_name("lobby"), connection_id("a"), Timestamp::new(0));
        directory.join(room_name("games"), connection_id("a"), Timestamp::new(0));
        directory.join(room_name("games"), connection_id("b"), Timestamp::new(0));

        // then:
        let rooms_of_a = directory.rooms_of(&connection_id("a"));
        assert_eq!(rooms_of_a.len(), 2);
        assert!(rooms_of_a.contains(&room_name("lobby")));
        assert!(rooms_of_a.contains(&room_name("games")));
        assert_eq!(directory.rooms_of(&connection_id("b")), vec![room_name("games")]);
    }

    #[test]
    fn test_directory_members_except_unknown_room_is_empty() {
        // given:
        let directory = RoomDirectory::new();

        // when:
        let others = directory.members_except(&room_name("nowhere"), &connection_id("a"));

        // then: no members, no error
        assert!(others.is_empty());
    }

    #[test]
    fn test_directory_leave_all_prunes_empty_rooms() {
        // given: "solo" holds only a, "shared" holds a and b
        let mut directory = RoomDirectory::new();
        directory.join(room_name("solo"), connection_id("a"), Timestamp::new(0));
        directory.join(room_name("shared"), connection_id("a"), Timestamp::new(0));
        directory.join(room_name("shared"), connection_id("b"), Timestamp::new(0));

        // when:
        let left = directory.leave_all(&connection_id("a"));

        // then: a left both rooms, and the emptied room was pruned
        assert_eq!(left.len(), 2);
        assert!(left.contains(&room_name("solo")));
        assert!(left.contains(&room_name("shared")));
        assert!(!directory.contains(&room_name("solo")));
        assert!(directory.contains(&room_name("shared")));
        assert_eq!(directory.room_count(), 1);
    }

    #[test]
    fn test_directory_leave_all_for_non_member_is_noop() {
        // given:
        let mut directory = RoomDirectory::new();
        directory.join(room_name("lobby"), connection_id("a"), Timestamp::new(0));

        // when:
        let left = directory.leave_all(&connection_id("b"));

        // then:
        assert!(left.is_empty());
        assert_eq!(directory.member_count(&room_name("lobby")), 1);
    }
}
