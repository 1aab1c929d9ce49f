//! Segment templates and the rotation catalog.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use neondrift_core::constants::{
    DEFAULT_SEGMENT_HALF_WIDTH, DEFAULT_SEGMENT_LENGTH, PROP_EXTENT_THRESHOLD,
};
use neondrift_core::enums::PropKind;

/// Bounding box of one visual sub-element, relative to the segment origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VisualExtent {
    /// Center offset from the segment's near edge.
    pub offset: DVec3,
    /// Full size of the bounding box.
    pub size: DVec3,
}

impl VisualExtent {
    /// Small attached extents (pickups, obstacles) are skipped when deriving
    /// segment length.
    pub fn counts_toward_length(&self) -> bool {
        self.size.length() > PROP_EXTENT_THRESHOLD
    }
}

/// Where a template places one prop on each spawned segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropSpec {
    pub kind: PropKind,
    /// Score value (gems).
    pub value: u32,
    /// Forward offset from the segment's near edge.
    pub offset_z: f64,
    /// Props are placed at a lateral position drawn uniformly from
    /// [-lateral_jitter, lateral_jitter] at spawn time.
    pub lateral_jitter: f64,
    /// Trigger radius.
    pub radius: f64,
}

/// One instantiable segment template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentTemplate {
    pub name: String,
    /// Explicit length; when None the length is derived from visuals.
    pub length: Option<f64>,
    pub half_width: f64,
    /// Visual sub-elements, used only for length derivation.
    pub visuals: Vec<VisualExtent>,
    pub props: Vec<PropSpec>,
}

impl SegmentTemplate {
    /// The length used for spawned segments: the explicit value if set,
    /// otherwise the forward span of the large visuals, otherwise the
    /// default length.
    pub fn resolved_length(&self) -> f64 {
        if let Some(length) = self.length {
            return length;
        }
        let mut span: Option<(f64, f64)> = None;
        for visual in self.visuals.iter().filter(|v| v.counts_toward_length()) {
            let near = visual.offset.z - visual.size.z * 0.5;
            let far = visual.offset.z + visual.size.z * 0.5;
            span = Some(match span {
                Some((min, max)) => (min.min(near), max.max(far)),
                None => (near, far),
            });
        }
        match span {
            Some((min, max)) => max - min,
            None => DEFAULT_SEGMENT_LENGTH,
        }
    }
}

/// Ordered catalog of templates. Rotation state (the cursor) lives in the
/// streamer, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: Vec<SegmentTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<SegmentTemplate>) -> Self {
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SegmentTemplate> {
        self.templates.get(index)
    }
}

/// A plain template with no props and an explicit length.
pub fn plain_template(name: &str, length: f64) -> SegmentTemplate {
    SegmentTemplate {
        name: name.to_string(),
        length: Some(length),
        half_width: DEFAULT_SEGMENT_HALF_WIDTH,
        visuals: Vec::new(),
        props: Vec::new(),
    }
}

/// The stock catalog the app runs with: a straightaway, an obstacle
/// gauntlet, a gem run, and a causeway whose length comes from its
/// deck visuals.
pub fn default_catalog() -> TemplateCatalog {
    let straightaway = plain_template("straightaway", DEFAULT_SEGMENT_LENGTH);

    let gauntlet = SegmentTemplate {
        name: "gauntlet".to_string(),
        length: Some(DEFAULT_SEGMENT_LENGTH),
        half_width: DEFAULT_SEGMENT_HALF_WIDTH,
        visuals: Vec::new(),
        props: vec![
            PropSpec {
                kind: PropKind::Obstacle,
                value: 0,
                offset_z: 35.0,
                lateral_jitter: 6.0,
                radius: 2.0,
            },
            PropSpec {
                kind: PropKind::Obstacle,
                value: 0,
                offset_z: 70.0,
                lateral_jitter: 6.0,
                radius: 2.0,
            },
        ],
    };

    let gem_run = SegmentTemplate {
        name: "gem-run".to_string(),
        length: Some(DEFAULT_SEGMENT_LENGTH),
        half_width: DEFAULT_SEGMENT_HALF_WIDTH,
        visuals: Vec::new(),
        props: vec![
            PropSpec {
                kind: PropKind::Gem,
                value: 10,
                offset_z: 25.0,
                lateral_jitter: 4.0,
                radius: 1.5,
            },
            PropSpec {
                kind: PropKind::Gem,
                value: 10,
                offset_z: 50.0,
                lateral_jitter: 4.0,
                radius: 1.5,
            },
            PropSpec {
                kind: PropKind::Gem,
                value: 10,
                offset_z: 75.0,
                lateral_jitter: 4.0,
                radius: 1.5,
            },
        ],
    };

    // Two deck slabs plus a small lamp prop that must not count.
    let causeway = SegmentTemplate {
        name: "causeway".to_string(),
        length: None,
        half_width: DEFAULT_SEGMENT_HALF_WIDTH,
        visuals: vec![
            VisualExtent {
                offset: DVec3::new(0.0, -1.0, 30.0),
                size: DVec3::new(20.0, 2.0, 60.0),
            },
            VisualExtent {
                offset: DVec3::new(0.0, -1.0, 90.0),
                size: DVec3::new(20.0, 2.0, 60.0),
            },
            VisualExtent {
                offset: DVec3::new(8.0, 3.0, 60.0),
                size: DVec3::new(0.5, 6.0, 0.5),
            },
        ],
        props: vec![PropSpec {
            kind: PropKind::Gem,
            value: 25,
            offset_z: 60.0,
            lateral_jitter: 5.0,
            radius: 1.5,
        }],
    };

    TemplateCatalog::new(vec![straightaway, gauntlet, gem_run, causeway])
}
