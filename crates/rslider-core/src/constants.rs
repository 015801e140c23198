// Shared defaults used by the engine and both front-ends.

// Classic profile (the slider's historical defaults)
pub const CLASSIC_MIN_VALUE: f64 = -20.0;
pub const CLASSIC_MAX_VALUE: f64 = 60.0;
pub const CLASSIC_STEP_SIZE: f64 = 10.0;

// Unit profile (small integer range used by the control panel demo)
pub const UNIT_MIN_VALUE: f64 = 0.0;
pub const UNIT_MAX_VALUE: f64 = 10.0;
pub const UNIT_STEP_SIZE: f64 = 1.0;

pub const DEFAULT_HANDLER_COUNT: usize = 1;
pub const MAX_HANDLER_COUNT: usize = 1024; // keeps a bad handlerCount from exhausting memory

// View defaults
pub const DEFAULT_HANDLER_RADIUS: f64 = 8.0; // px, consumed by the renderer only
pub const MAX_PROGRESS_HANDLERS: usize = 2; // progress bar spans at most two handles

// Scale
pub const DEFAULT_MAX_SCALE_MARKS: usize = 10; // intervals, i.e. 11 marks

// Axis
pub const AXIS_MIN_PERCENT: f64 = 0.0;
pub const AXIS_MAX_PERCENT: f64 = 100.0;

// Tolerance for float comparisons against grid lines, in units of one step
pub const GRID_EPSILON: f64 = 1e-9;
