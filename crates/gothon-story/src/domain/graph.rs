//! The story graph: an arena of rooms indexed by tag.

use std::collections::{HashMap, HashSet, VecDeque};

use gothon_core::error::GameError;

use super::room::{Room, normalize_action};
use crate::error::StoryError;

/// The fixed set of rooms and their wiring.
///
/// Built once at startup through [`StoryGraphBuilder`], then shared
/// read-only between requests. Transitions name their targets by tag and
/// are resolved through the arena, so cycles need no special handling.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    rooms: HashMap<String, Room>,
    start: String,
}

impl StoryGraph {
    /// Returns a builder for a new graph.
    #[must_use]
    pub fn builder() -> StoryGraphBuilder {
        StoryGraphBuilder::default()
    }

    /// Looks up a room by tag.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownRoom` if no room has this tag, e.g. when a
    /// stored session references a room removed from the story.
    pub fn lookup(&self, tag: &str) -> Result<&Room, GameError> {
        self.rooms
            .get(tag)
            .ok_or_else(|| GameError::UnknownRoom(tag.to_owned()))
    }

    /// The room every new game starts in.
    #[must_use]
    pub fn start(&self) -> &Room {
        // The builder guarantees the start tag is present.
        &self.rooms[&self.start]
    }

    /// Tag of the start room.
    #[must_use]
    pub fn start_tag(&self) -> &str {
        &self.start
    }

    /// Computes where `action` leads from `room`, or `None` if the player
    /// stays where they are.
    #[must_use]
    pub fn go<'g>(&'g self, room: &Room, action: &str) -> Option<&'g Room> {
        room.resolve(action).and_then(|tag| self.rooms.get(tag))
    }

    /// Number of rooms in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates over all rooms in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Tags of rooms that cannot be reached from the start room, sorted.
    #[must_use]
    pub fn unreachable_tags(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([self.start.as_str()]);
        while let Some(tag) = queue.pop_front() {
            if !seen.insert(tag) {
                continue;
            }
            if let Some(room) = self.rooms.get(tag) {
                queue.extend(room.transitions().values().map(String::as_str));
            }
        }

        let mut unreachable: Vec<&str> = self
            .rooms
            .keys()
            .map(String::as_str)
            .filter(|tag| !seen.contains(tag))
            .collect();
        unreachable.sort_unstable();
        unreachable
    }
}

/// Two-phase builder for a [`StoryGraph`]: register every room with its
/// texts, then attach transitions, then freeze.
#[derive(Debug, Default)]
pub struct StoryGraphBuilder {
    rooms: HashMap<String, Room>,
}

impl StoryGraphBuilder {
    /// Registers a room.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::DuplicateRoom` if the tag is already registered.
    pub fn add_room(&mut self, room: Room) -> Result<&mut Self, StoryError> {
        let tag = room.tag().to_owned();
        if self.rooms.contains_key(&tag) {
            return Err(StoryError::DuplicateRoom(tag));
        }
        self.rooms.insert(tag, room);
        Ok(self)
    }

    /// Adds a transition from `from` on `action` to `to`. Adding the same
    /// action twice replaces the earlier target.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownSource` if `from` is not registered and
    /// `StoryError::UnnormalizedAction` if `action` could never be matched.
    pub fn connect(&mut self, from: &str, action: &str, to: &str) -> Result<&mut Self, StoryError> {
        if normalize_action(action) != action {
            return Err(StoryError::UnnormalizedAction {
                room: from.to_owned(),
                action: action.to_owned(),
            });
        }
        let room = self
            .rooms
            .get_mut(from)
            .ok_or_else(|| StoryError::UnknownSource(from.to_owned()))?;
        room.transitions.insert(action.to_owned(), to.to_owned());
        Ok(self)
    }

    /// Freezes the graph with `start` as the designated start room.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStart` if `start` is not registered and
    /// `StoryError::UnknownTarget` if any transition leads nowhere.
    pub fn build(self, start: &str) -> Result<StoryGraph, StoryError> {
        if !self.rooms.contains_key(start) {
            return Err(StoryError::UnknownStart(start.to_owned()));
        }
        for room in self.rooms.values() {
            for (action, to) in room.transitions() {
                if !self.rooms.contains_key(to) {
                    return Err(StoryError::UnknownTarget {
                        from: room.tag().to_owned(),
                        action: action.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
        Ok(StoryGraph {
            rooms: self.rooms,
            start: start.to_owned(),
        })
    }
}
