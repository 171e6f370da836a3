//! The "spinning wheel" reveal.
//!
//! Names are drawn and written over each other on a single line with a delay
//! of `x^10 + 0.05` seconds, `x` growing by 0.02 per name. The delay stays
//! near 50 ms for most of the run and grows sharply at the end; the wheel
//! stops once `x` exceeds 1.05, leaving the last name on screen.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::{SampleError, WheelError};

/// `x` is tracked in hundredths so the stopping point is exact.
const STEP_HUNDREDTHS: u32 = 2;
const LIMIT_HUNDREDTHS: u32 = 105;
const BASE_DELAY_NANOS: u128 = 50_000_000;
/// `(h / 100)^10` seconds is `h^10 / 10^11` nanoseconds.
const POWER_DIVISOR: u128 = 100_000_000_000;

/// Blocks between wheel frames.
pub trait Pause {
    /// Waits for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Sleeps on the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Delay after the frame drawn at `x = hundredths / 100`.
#[must_use]
pub fn frame_delay(hundredths: u32) -> Duration {
    // Truncates to whole nanoseconds; the divisor is a non-zero constant.
    let power = u128::from(hundredths)
        .pow(10)
        .checked_div(POWER_DIVISOR)
        .unwrap_or_default();
    let nanos = u64::try_from(power + BASE_DELAY_NANOS).unwrap_or(u64::MAX);
    Duration::from_nanos(nanos)
}

/// Spins the wheel, writing frames to `out` until it stops.
///
/// Each frame clears the previous name (carriage return, spaces, carriage
/// return) before writing the next one. A single newline is written once the
/// wheel stops.
///
/// # Errors
///
/// Returns [`WheelError::Io`] if `out` fails and [`WheelError::Sample`] if
/// `next_name` fails. A failure after the first frame still ends the line
/// so that later output starts on a fresh one.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use qngng::{Pause, spin};
///
/// struct NoPause;
/// impl Pause for NoPause {
///     fn pause(&mut self, _: Duration) {}
/// }
///
/// let mut out = Vec::new();
/// spin(&mut out, &mut NoPause, || Ok("Jean Tremblay".to_owned())).expect("wheel spins");
///
/// assert!(String::from_utf8(out).expect("utf-8").ends_with("\rJean Tremblay\n"));
/// ```
pub fn spin<W, P, F>(out: &mut W, pause: &mut P, mut next_name: F) -> Result<(), WheelError>
where
    W: Write + ?Sized,
    P: Pause + ?Sized,
    F: FnMut() -> Result<String, SampleError>,
{
    let mut x = 0;
    let mut previous_len = 0;
    let mut frames = 0_u32;

    loop {
        let name = match next_name() {
            Ok(name) => name,
            Err(err) => {
                if frames > 0 {
                    writeln!(out)?;
                    out.flush()?;
                }
                return Err(err.into());
            }
        };
        write!(out, "\r{:previous_len$}\r{name}", "")?;
        out.flush()?;
        previous_len = name.chars().count();
        frames += 1;

        let delay = frame_delay(x);
        x += STEP_HUNDREDTHS;
        if x > LIMIT_HUNDREDTHS {
            break;
        }
        pause.pause(delay);
    }

    writeln!(out)?;
    out.flush()?;
    debug!(frames, "wheel stopped");
    Ok(())
}
