//! Tests for template length derivation and segment triggers.

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use neondrift_core::constants::{DEFAULT_SEGMENT_LENGTH, SEGMENT_SPACING};

    use crate::catalog::{default_catalog, plain_template, SegmentTemplate, VisualExtent};
    use crate::triggers::{evaluate, far_end, SegmentContext};

    fn context(craft_z: f64, requested: bool) -> SegmentContext {
        SegmentContext {
            origin_z: 0.0,
            length: 100.0,
            spacing: 10.0,
            delete_margin: 50.0,
            craft_z,
            successor_requested: requested,
        }
    }

    // ---- Spawn trigger ----

    #[test]
    fn test_spawn_trigger_fires_at_half_length() {
        // Segment [0, 100]: remaining distance to the far end drops below 50
        // once the craft passes z = 50.
        assert!(evaluate(&context(49.9, false)).request_successor_at.is_none());
        assert!(evaluate(&context(50.0, false)).request_successor_at.is_none());

        let directive = evaluate(&context(50.1, false));
        assert_eq!(directive.request_successor_at, Some(110.0));
        assert!(!directive.retire);
    }

    #[test]
    fn test_spawn_trigger_one_shot() {
        // Once the flag is set the trigger never fires again, deep into the
        // segment or past it.
        for z in [51.0, 75.0, 100.0, 180.0] {
            assert!(evaluate(&context(z, true)).request_successor_at.is_none());
        }
    }

    #[test]
    fn test_successor_position_includes_spacing() {
        let ctx = SegmentContext {
            origin_z: 110.0,
            length: 120.0,
            spacing: SEGMENT_SPACING,
            delete_margin: 50.0,
            craft_z: 200.0,
            successor_requested: false,
        };
        assert_eq!(evaluate(&ctx).request_successor_at, Some(110.0 + 120.0 + 10.0));
    }

    // ---- Retire trigger ----

    #[test]
    fn test_retire_fires_past_far_end_plus_margin() {
        // Far end 100, full length 100, margin 50: retires past z = 250.
        assert!(!evaluate(&context(249.9, true)).retire);
        assert!(evaluate(&context(250.1, true)).retire);
    }

    #[test]
    fn test_retire_independent_of_successor_flag() {
        assert!(evaluate(&context(260.0, false)).retire);
    }

    #[test]
    fn test_far_end() {
        assert_eq!(far_end(110.0, 120.0), 230.0);
    }

    // ---- Length derivation ----

    #[test]
    fn test_explicit_length_wins() {
        let mut template = plain_template("t", 80.0);
        template.visuals.push(VisualExtent {
            offset: DVec3::new(0.0, 0.0, 100.0),
            size: DVec3::new(20.0, 2.0, 200.0),
        });
        assert_eq!(template.resolved_length(), 80.0);
    }

    #[test]
    fn test_derived_length_spans_large_visuals() {
        let template = SegmentTemplate {
            name: "derived".to_string(),
            length: None,
            half_width: 10.0,
            visuals: vec![
                VisualExtent {
                    offset: DVec3::new(0.0, -1.0, 25.0),
                    size: DVec3::new(20.0, 2.0, 50.0),
                },
                VisualExtent {
                    offset: DVec3::new(0.0, -1.0, 75.0),
                    size: DVec3::new(20.0, 2.0, 50.0),
                },
            ],
            props: Vec::new(),
        };
        assert_eq!(template.resolved_length(), 100.0);
    }

    #[test]
    fn test_derived_length_skips_small_props() {
        let template = SegmentTemplate {
            name: "with-lamp".to_string(),
            length: None,
            half_width: 10.0,
            visuals: vec![
                VisualExtent {
                    offset: DVec3::new(0.0, -1.0, 50.0),
                    size: DVec3::new(20.0, 2.0, 100.0),
                },
                // A lamp post far past the deck; small, so it must not stretch
                // the derived length.
                VisualExtent {
                    offset: DVec3::new(8.0, 3.0, 150.0),
                    size: DVec3::new(0.5, 6.0, 0.5),
                },
            ],
            props: Vec::new(),
        };
        assert_eq!(template.resolved_length(), 100.0);
    }

    #[test]
    fn test_no_visuals_falls_back_to_default() {
        let template = SegmentTemplate {
            name: "bare".to_string(),
            length: None,
            half_width: 10.0,
            visuals: Vec::new(),
            props: Vec::new(),
        };
        assert_eq!(template.resolved_length(), DEFAULT_SEGMENT_LENGTH);
    }

    // ---- Stock catalog ----

    #[test]
    fn test_default_catalog_non_empty() {
        let catalog = default_catalog();
        assert!(!catalog.is_empty());
        for i in 0..catalog.len() {
            let template = catalog.get(i).unwrap();
            assert!(
                template.resolved_length() > 0.0,
                "template {} has no usable length",
                template.name
            );
        }
    }

    #[test]
    fn test_causeway_length_derived_from_deck() {
        let catalog = default_catalog();
        let causeway = (0..catalog.len())
            .map(|i| catalog.get(i).unwrap())
            .find(|t| t.name == "causeway")
            .unwrap();
        // Two 60 m slabs laid end to end.
        assert_eq!(causeway.resolved_length(), 120.0);
    }
}
