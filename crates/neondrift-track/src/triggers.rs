//! Segment self-management triggers.
//!
//! Pure decision functions evaluated once per tick for every live segment
//! against the craft's forward coordinate. The streamer acts on the
//! directives; segments only decide *when*, never *how*.

/// Inputs for one segment's trigger evaluation.
#[derive(Debug, Clone, Copy)]
pub struct SegmentContext {
    /// Coordinate of the segment's near edge at spawn time.
    pub origin_z: f64,
    pub length: f64,
    /// Gap inserted between this segment's far end and its successor.
    pub spacing: f64,
    /// Safety margin for the retire trigger.
    pub delete_margin: f64,
    /// Craft forward coordinate this tick.
    pub craft_z: f64,
    /// One-shot guard, true once the spawn trigger has fired.
    pub successor_requested: bool,
}

/// What the segment asks the streamer to do this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentDirective {
    /// Origin for the successor segment, set at most once per segment.
    pub request_successor_at: Option<f64>,
    /// True once the craft is safely past; destruction is terminal so no
    /// guard flag is needed.
    pub retire: bool,
}

/// Coordinate of the segment's far end.
pub fn far_end(origin_z: f64, length: f64) -> f64 {
    origin_z + length
}

/// Evaluate both triggers for one segment.
///
/// Spawn-next fires once the craft's remaining distance to the far end drops
/// below half this segment's length; the successor starts one full length
/// plus the configured spacing beyond this segment's origin. Retire fires
/// once the craft has passed the far end by more than a full length plus the
/// safety margin.
pub fn evaluate(ctx: &SegmentContext) -> SegmentDirective {
    let end = far_end(ctx.origin_z, ctx.length);

    let request_successor_at = if !ctx.successor_requested && end - ctx.craft_z < ctx.length * 0.5
    {
        Some(ctx.origin_z + ctx.length + ctx.spacing)
    } else {
        None
    };

    let retire = ctx.craft_z > end + ctx.length + ctx.delete_margin;

    SegmentDirective {
        request_successor_at,
        retire,
    }
}
