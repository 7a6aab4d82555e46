//! Text rendering of vectors.
//!
//! `Display` renders `(x, y, z)`. The alternate flag (`{:#}`) drops the
//! parentheses, and a precision (`{:.2}`) applies to every component. Width,
//! fill and alignment (`{:>24}`, `{:*^30}`) pad the whole rendering; sign and
//! zero-padding flags are ignored. Without a
//! precision each component uses Rust's shortest round-trip float formatting,
//! so `Vector3::new(1.0, 2.5, -3.0)` prints as `(1, 2.5, -3)`.

use crate::Vector3;
use std::fmt::{self, Write as _};

impl Vector3 {
    /// Comma-separated components, wrapped in parentheses when `wrap` is set.
    ///
    /// ```
    /// use vector3_core::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.to_string_wrapped(false), "1, 2, 3");
    /// assert_eq!(v.to_string_wrapped(true), "(1, 2, 3)");
    /// ```
    pub fn to_string_wrapped(self, wrap: bool) -> String {
        if wrap {
            format!("{self}")
        } else {
            format!("{self:#}")
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match f.precision() {
            Some(p) => format!("{:.*}, {:.*}, {:.*}", p, self.x, p, self.y, p, self.z),
            None => format!("{}, {}, {}", self.x, self.y, self.z),
        };
        let text = if f.alternate() { body } else { format!("({body})") };

        let padding = f.width().map_or(0, |w| w.saturating_sub(text.chars().count()));
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}
