// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon areas and the per-map store.

use hashbrown::HashMap;
use kurbo::{BezPath, Point, Rect, Shape};
use smallvec::SmallVec;

use crate::MapLoadError;

/// One polygon as produced by a [`MapParser`](crate::MapParser).
#[derive(Clone, Debug, PartialEq)]
pub struct AreaRecord {
    /// Logical id, shared by all polygons of one area.
    pub id: i32,
    /// Secondary discriminator between polygons sharing an id.
    pub target_group: i32,
    /// Polygon vertices in content space; the polygon is implicitly closed.
    pub points: Vec<Point>,
}

impl AreaRecord {
    /// Creates a record from anything convertible to points.
    pub fn new<P: Into<Point>>(id: i32, target_group: i32, points: impl IntoIterator<Item = P>) -> Self {
        Self {
            id,
            target_group,
            points: points.into_iter().map(Into::into).collect(),
        }
    }
}

/// Target group filter for [`AreaSet::resolve_store_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TargetGroup {
    /// Match any group.
    #[default]
    Any,
    /// Match only this group.
    Exact(i32),
}

/// A parsed polygon with its closed path and bounding box.
#[derive(Clone, Debug)]
pub struct Area {
    id: i32,
    target_group: i32,
    points: Vec<Point>,
    path: BezPath,
    bounds: Rect,
}

impl Area {
    fn from_record(record: AreaRecord, index: usize) -> Result<Self, MapLoadError> {
        if record.points.len() < 3 || record.points.iter().any(|p| !p.is_finite()) {
            return Err(MapLoadError::InvalidArea { index });
        }
        let mut path = BezPath::new();
        path.move_to(record.points[0]);
        for &pt in &record.points[1..] {
            path.line_to(pt);
        }
        path.close_path();
        let bounds = path.bounding_box();
        Ok(Self {
            id: record.id,
            target_group: record.target_group,
            points: record.points,
            path,
            bounds,
        })
    }

    /// Logical id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Target group.
    pub fn target_group(&self) -> i32 {
        self.target_group
    }

    /// Vertices in content space.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Closed outline in content space.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Bounding box in content space.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns `true` if `pt` lies inside the polygon (nonzero winding).
    ///
    /// The bounding box is checked first, so misses are cheap.
    pub fn contains(&self, pt: Point) -> bool {
        let b = self.bounds;
        if pt.x < b.x0 || pt.x > b.x1 || pt.y < b.y0 || pt.y > b.y1 {
            return false;
        }
        self.path.contains(pt)
    }
}

#[derive(Clone, Debug, Default)]
struct IdEntry {
    indices: SmallVec<[usize; 2]>,
    groups: SmallVec<[i32; 2]>,
}

/// The areas of one map, in parser order.
///
/// Store indices are positions in that order and are what highlighting and
/// hit testing speak in; [`AreaSet::data_id`] maps them back to logical ids.
#[derive(Clone, Debug, Default)]
pub struct AreaSet {
    areas: Vec<Area>,
    by_id: HashMap<i32, IdEntry>,
}

impl AreaSet {
    /// Builds a store, rejecting degenerate polygons.
    pub fn from_records(records: impl IntoIterator<Item = AreaRecord>) -> Result<Self, MapLoadError> {
        let mut set = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            let area = Area::from_record(record, index)?;
            let entry = set.by_id.entry(area.id).or_default();
            entry.indices.push(index);
            entry.groups.push(area.target_group);
            set.areas.push(area);
        }
        Ok(set)
    }

    /// Number of areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns `true` if the map has no areas.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// All areas in store order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// The area at a store index.
    pub fn get(&self, index: usize) -> Option<&Area> {
        self.areas.get(index)
    }

    /// Logical id of the area at a store index.
    pub fn data_id(&self, index: usize) -> Option<i32> {
        self.areas.get(index).map(Area::id)
    }

    /// First store index whose id (and, if given, target group) matches.
    ///
    /// This is a linear scan; maps are small enough that an index per
    /// `(id, group)` pair would not pay for itself.
    pub fn resolve_store_index(&self, id: i32, group: TargetGroup) -> Option<usize> {
        self.areas.iter().position(|area| {
            area.id == id
                && match group {
                    TargetGroup::Any => true,
                    TargetGroup::Exact(g) => area.target_group == g,
                }
        })
    }

    /// Target groups registered under `id`, in insertion order.
    pub fn groups_for_id(&self, id: i32) -> &[i32] {
        self.by_id
            .get(&id)
            .map(|entry| entry.groups.as_slice())
            .unwrap_or(&[])
    }

    /// Store indices registered under `id`, in insertion order.
    pub fn indices_for_id(&self, id: i32) -> &[usize] {
        self.by_id
            .get(&id)
            .map(|entry| entry.indices.as_slice())
            .unwrap_or(&[])
    }

    /// Union of the bounding boxes of the given areas; out-of-range indices
    /// are skipped.
    pub fn bounds_of(&self, indices: &[usize]) -> Option<Rect> {
        indices
            .iter()
            .filter_map(|&i| self.areas.get(i))
            .map(Area::bounds)
            .reduce(|acc, r| acc.union(r))
    }
}
