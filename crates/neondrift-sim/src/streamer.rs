//! The track streamer — sole owner of the active-segment registry and the
//! only component allowed to instantiate or destroy segments.
//!
//! Segments decide *when* through their triggers; everything that touches
//! entity lifetime or the registry goes through here.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use neondrift_core::components::{Prop, Segment, SegmentInfo};
use neondrift_core::events::SimEvent;
use neondrift_core::types::Position;
use neondrift_track::catalog::TemplateCatalog;

pub struct TrackStreamer {
    catalog: TemplateCatalog,
    /// Live segment handles, in spawn order.
    registry: Vec<Entity>,
    /// Rotation index into the catalog; advances modulo its size.
    cursor: usize,
    next_segment_id: u32,
    max_active: usize,
    spacing: f64,
}

impl TrackStreamer {
    pub fn new(catalog: TemplateCatalog, max_active: usize, spacing: f64) -> Self {
        if catalog.is_empty() {
            tracing::warn!("template catalog is empty; no segments will spawn");
        }
        Self {
            catalog,
            registry: Vec::new(),
            cursor: 0,
            next_segment_id: 0,
            max_active,
            spacing,
        }
    }

    /// Gap between consecutive segments.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Live segment count after pruning.
    pub fn active_count(&mut self, world: &World) -> usize {
        self.housekeep(world);
        self.registry.len()
    }

    /// Instantiate the next template in rotation order with its near edge at
    /// `origin_z`. Refuses (logged no-op) when the catalog is empty or the
    /// registry is at capacity. Returns the new entity and its length.
    pub fn spawn_next(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        origin_z: f64,
        events: &mut Vec<SimEvent>,
    ) -> Option<(Entity, f64)> {
        // Prune before the capacity check so transient destruction never
        // causes a refusal on stale entries.
        self.housekeep(world);

        let Some(template) = self.catalog.get(self.cursor) else {
            tracing::debug!("spawn refused: catalog is empty");
            return None;
        };

        if self.registry.len() >= self.max_active {
            tracing::debug!(
                active = self.registry.len(),
                max = self.max_active,
                "spawn refused: registry at capacity"
            );
            return None;
        }

        let length = template.resolved_length();
        let id = self.next_segment_id;
        self.next_segment_id += 1;

        let entity = world.spawn((
            Segment,
            Position::new(0.0, 0.0, origin_z),
            SegmentInfo {
                id,
                origin_z,
                length,
                half_width: template.half_width,
                template: self.cursor,
                successor_requested: false,
            },
        ));
        self.registry.push(entity);

        for spec in &template.props {
            let x = if spec.lateral_jitter > 0.0 {
                rng.gen_range(-spec.lateral_jitter..=spec.lateral_jitter)
            } else {
                0.0
            };
            world.spawn((
                Prop {
                    kind: spec.kind,
                    value: spec.value,
                    radius: spec.radius,
                    triggered: false,
                    segment_id: id,
                },
                Position::new(x, 1.0, origin_z + spec.offset_z),
            ));
        }

        tracing::debug!(
            id,
            origin_z,
            length,
            template = %template.name,
            active = self.registry.len(),
            "spawned segment"
        );
        events.push(SimEvent::SegmentSpawned {
            id,
            origin_z,
            template: self.cursor,
        });

        self.cursor = (self.cursor + 1) % self.catalog.len();
        Some((entity, length))
    }

    /// Chain segments from `origin_z` to give a fresh session runway ahead
    /// of the craft.
    pub fn seed(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        origin_z: f64,
        count: usize,
        events: &mut Vec<SimEvent>,
    ) {
        let mut next_origin = origin_z;
        for _ in 0..count {
            match self.spawn_next(world, rng, next_origin, events) {
                Some((_, length)) => next_origin += length + self.spacing,
                None => break,
            }
        }
    }

    /// Destroy a segment and its props on the segment's own request.
    /// Destroying an already-cleared segment is a no-op.
    pub fn retire(&mut self, world: &mut World, entity: Entity, events: &mut Vec<SimEvent>) {
        let found = world
            .get::<&SegmentInfo>(entity)
            .ok()
            .map(|info| (info.id, info.origin_z));
        if let Some((id, origin_z)) = found {
            tracing::debug!(id, origin_z, "retiring segment");
            events.push(SimEvent::SegmentRetired { id, origin_z });
            despawn_segment(world, entity, id);
        }
        self.registry.retain(|e| *e != entity);
    }

    /// Destroy every tracked segment and empty the registry. Safe to call
    /// when the registry is already empty.
    pub fn clear_all(&mut self, world: &mut World) {
        let cleared = self.registry.len();
        for entity in std::mem::take(&mut self.registry) {
            let found = world.get::<&SegmentInfo>(entity).ok().map(|info| info.id);
            if let Some(id) = found {
                despawn_segment(world, entity, id);
            }
        }
        if cleared > 0 {
            tracing::debug!(cleared, "cleared all segments");
        }
    }

    /// Prune registry entries whose segment no longer exists. Runs every
    /// tick and again inside `spawn_next` before the capacity check.
    pub fn housekeep(&mut self, world: &World) {
        self.registry.retain(|e| world.contains(*e));
    }

    #[cfg(test)]
    pub fn registry(&self) -> &[Entity] {
        &self.registry
    }
}

/// Despawn one segment entity together with its props.
fn despawn_segment(world: &mut World, entity: Entity, segment_id: u32) {
    let props: Vec<Entity> = world
        .query::<&Prop>()
        .iter()
        .filter(|(_, prop)| prop.segment_id == segment_id)
        .map(|(e, _)| e)
        .collect();
    for prop in props {
        let _ = world.despawn(prop);
    }
    let _ = world.despawn(entity);
}
