use core::fmt;

/// Reasons a line cannot be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Both `a` and `b` are zero, so the line has no direction.
    DegenerateLine,
    /// Canvas width or height is zero.
    EmptyCanvas { width: u32, height: u32 },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateLine => write!(f, "degenerate line: a and b are both zero"),
            Self::EmptyCanvas { width, height } => {
                write!(f, "empty canvas: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for DrawError {}
