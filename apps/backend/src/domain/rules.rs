//! Fixed gameplay constants.

use time::Duration;

/// How long an eliminated participant has to dispute the hit.
///
/// Until this window closes the casualty still occupies its slot in the
/// targeting cycle; afterwards it is skipped for good.
pub const HIT_COOLDOWN: Duration = Duration::minutes(5);
