//! Simulation constants and default tuning parameters.
//!
//! Tunables also appear on [`crate::config::SimTuning`]; the values here are
//! its defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Planar movement ---

/// Constant forward speed along the track axis (m/s).
pub const FORWARD_SPEED: f64 = 250.0;

/// Lateral speed at full steering deflection (m/s).
pub const STRAFE_SPEED: f64 = 200.0;

// --- Hovering ---

/// Target hover height above the track surface (m).
pub const HOVER_HEIGHT: f64 = 2.0;

/// Spring constant of the hover force (N per meter of height error).
pub const HOVER_FORCE: f64 = 500.0;

/// Damping applied against vertical velocity while hovering.
pub const HOVER_DAMPING: f64 = 50.0;

/// Gravity multiplier applied when the ground probe finds nothing in range.
pub const FALL_MULTIPLIER: f64 = 5.0;

// --- Fast fall ---

/// Extra downward force while airborne and descending (N).
pub const FAST_FALL_FORCE: f64 = FALL_MULTIPLIER * 100.0;

/// Maximum downward speed magnitude (m/s), enforced after integration.
pub const MAX_FALL_SPEED: f64 = 50.0;

// --- Banking ---

/// Maximum roll angle at full steering deflection (radians, 45 degrees).
pub const MAX_BANK_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Exponential smoothing rate toward the target bank angle (1/s).
pub const BANK_SMOOTHING: f64 = 5.0;

// --- Ground detection ---

/// Maximum downward probe distance (m).
pub const GROUND_CHECK_DISTANCE: f64 = 10.0;

/// Default probe anchor offset below the craft origin (m).
pub const PROBE_ANCHOR_DROP: f64 = 0.5;

// --- Bouncing ---

/// Vertical velocity assigned on a qualifying ground impact (m/s).
pub const BOUNCE_VELOCITY: f64 = 100.0;

/// Minimum downward speed required for a bounce (m/s).
pub const MIN_BOUNCE_VELOCITY: f64 = 2.0;

/// Hover suppression window after a bounce (seconds).
pub const BOUNCE_COOLDOWN_SECS: f64 = 0.5;

// --- Track streaming ---

/// Maximum number of live segments.
pub const MAX_ACTIVE_SEGMENTS: usize = 5;

/// Gap between the end of one segment and the start of the next (m).
pub const SEGMENT_SPACING: f64 = 10.0;

/// Safety margin past a segment's far end before it retires itself (m).
pub const DELETE_MARGIN: f64 = 50.0;

/// Segments chained at session start to give the craft runway.
pub const INITIAL_SEGMENTS: usize = 3;

/// Fallback segment length when neither configured nor derivable (m).
pub const DEFAULT_SEGMENT_LENGTH: f64 = 100.0;

/// Default segment half-width (m).
pub const DEFAULT_SEGMENT_HALF_WIDTH: f64 = 10.0;

/// Visual sub-elements smaller than this (size magnitude, m) are treated as
/// props and excluded from length derivation.
pub const PROP_EXTENT_THRESHOLD: f64 = 10.0;

// --- World ---

/// Standard gravity (m/s², applied on y).
pub const GRAVITY_Y: f64 = -9.81;

/// Height at which a fallen craft ends the run (m).
pub const KILL_PLANE_Y: f64 = -100.0;

// --- Craft defaults ---

/// Default craft mass (kg).
pub const CRAFT_MASS: f64 = 1.0;

/// Default craft collider half extents (m): x lateral, y up, z forward.
pub const CRAFT_HALF_EXTENTS: [f64; 3] = [1.0, 0.5, 2.0];

// --- Simulation control ---

/// Maximum time scale accepted by SetTimeScale.
pub const TIME_SCALE_MAX: f64 = 4.0;
