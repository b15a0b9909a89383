//! Native functions installed into every interpreter's global scope.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::native_failure;
use crate::{EvalResult, NativeFunction, Value};

/// `clock()`: seconds since the Unix epoch, with sub-second precision.
pub const CLOCK: NativeFunction = NativeFunction::new("clock", 0, clock);

fn clock(_args: &[Value]) -> EvalResult {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| native_failure("clock", e.to_string()))?;
    Ok(Value::Number(elapsed.as_secs_f64()))
}

/// Natives defined by default.
pub(crate) fn standard() -> [NativeFunction; 1] {
    [CLOCK]
}
