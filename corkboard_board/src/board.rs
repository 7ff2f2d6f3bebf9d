// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The z-ordered object collection.

use alloc::vec::Vec;

use corkboard_geometry::Quad;
use kurbo::{Point, Vec2};

use crate::object::{BoardObject, ObjectId};

/// Ordered, keyed collection of board objects.
///
/// The list order is the z-order: index 0 renders at the back, the last
/// index at the front. Ids are unique within the collection; layering
/// operations reposition entries without duplicating or dropping them.
///
/// Every by-id operation is a silent no-op when the id is absent. Mutations
/// are synchronous, whole-object replacements; observers never see a
/// partially written object.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    objects: Vec<BoardObject>,
    next_id: u64,
    revision: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Returns the number of objects on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the board has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when a mutation changes semantic contents;
    /// no-op calls (absent ids, already-extremal layering, equal values)
    /// leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Allocates the next object id.
    ///
    /// Ids are monotonically increasing and never reused within this board,
    /// so an id stays stable (and dangling references stay harmless) across
    /// the object's whole lifetime.
    pub fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends `object` to the front of the z-order.
    ///
    /// New objects render on top. If an object with the same id is already
    /// present, the board is left unchanged.
    pub fn add(&mut self, object: BoardObject) {
        if self.position_of(object.id).is_some() {
            return;
        }
        self.objects.push(object);
        self.bump_revision();
    }

    /// Removes the object with the given id, if present.
    pub fn remove(&mut self, id: ObjectId) {
        if let Some(index) = self.position_of(id) {
            self.objects.remove(index);
            self.bump_revision();
        }
    }

    /// Returns the object with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&BoardObject> {
        self.position_of(id).map(|index| &self.objects[index])
    }

    /// Replaces the geometry of the object with the given id.
    pub fn set_quad(&mut self, id: ObjectId, quad: Quad) {
        if let Some(index) = self.position_of(id)
            && self.objects[index].quad != quad
        {
            self.objects[index].quad = quad;
            self.bump_revision();
        }
    }

    /// Sets the absolute rotation angle, in radians, of the object with the
    /// given id.
    ///
    /// The quad is rigidly rotated about its own center from its current
    /// angle to `angle`; size and center are unchanged.
    pub fn set_rotation(&mut self, id: ObjectId, angle: f64) {
        if let Some(index) = self.position_of(id) {
            let quad = self.objects[index].quad;
            let rot = Vec2::from_angle(angle - quad.rotation());
            let rotated = quad.rotate_about(quad.center(), rot.x, rot.y);
            if rotated != quad {
                self.objects[index].quad = rotated;
                self.bump_revision();
            }
        }
    }

    /// Sets the locked flag of the object with the given id.
    pub fn set_locked(&mut self, id: ObjectId, locked: bool) {
        if let Some(index) = self.position_of(id)
            && self.objects[index].locked != locked
        {
            self.objects[index].locked = locked;
            self.bump_revision();
        }
    }

    /// Sets the aspect-ratio lock of the object with the given id.
    pub fn set_lock_aspect_ratio(&mut self, id: ObjectId, lock: bool) {
        if let Some(index) = self.position_of(id)
            && self.objects[index].lock_aspect_ratio != lock
        {
            self.objects[index].lock_aspect_ratio = lock;
            self.bump_revision();
        }
    }

    /// Moves the object with the given id to the front of the z-order.
    ///
    /// The relative order of all other objects is unchanged. A no-op if the
    /// object is already frontmost.
    pub fn bring_to_front(&mut self, id: ObjectId) {
        match self.position_of(id) {
            Some(index) if index + 1 != self.objects.len() => {
                let object = self.objects.remove(index);
                self.objects.push(object);
                self.bump_revision();
            }
            _ => {}
        }
    }

    /// Moves the object with the given id to the back of the z-order.
    ///
    /// The relative order of all other objects is unchanged. A no-op if the
    /// object is already backmost.
    pub fn send_to_back(&mut self, id: ObjectId) {
        match self.position_of(id) {
            Some(index) if index != 0 => {
                let object = self.objects.remove(index);
                self.objects.insert(0, object);
                self.bump_revision();
            }
            _ => {}
        }
    }

    /// Returns the objects in z-order, back to front.
    #[must_use]
    pub fn objects(&self) -> &[BoardObject] {
        &self.objects
    }

    /// Returns an iterator over the objects in z-order, back to front.
    pub fn iter(&self) -> core::slice::Iter<'_, BoardObject> {
        self.objects.iter()
    }

    /// Returns the object ids in z-order, back to front.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.iter().map(|object| object.id)
    }

    /// Returns the frontmost object whose footprint contains `world_point`.
    ///
    /// Used to route pointer-downs: the search walks the z-order front to
    /// back, so an object visually covering another wins the hit.
    #[must_use]
    pub fn top_hit(&self, world_point: Point) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .find(|object| object.quad.contains(world_point))
            .map(|object| object.id)
    }

    fn position_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|object| object.id == id)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a BoardObject;
    type IntoIter = core::slice::Iter<'a, BoardObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
