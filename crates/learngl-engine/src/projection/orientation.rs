/// Which logical axis receives the aspect-ratio correction.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Orientation {
    /// Horizontal axis spans `[-1, 1]`; vertical extent is `height / width`.
    #[default]
    Portrait,
    /// Vertical axis spans `[-1, 1]`; horizontal extent is `width / height`.
    Landscape,
}

impl Orientation {
    #[inline]
    pub const fn from_portrait(portrait: bool) -> Self {
        if portrait { Self::Portrait } else { Self::Landscape }
    }

    #[inline]
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

impl From<bool> for Orientation {
    fn from(portrait: bool) -> Self {
        Self::from_portrait(portrait)
    }
}

/// Orientation policy as configured by the user.
///
/// `Auto` re-evaluates on every surface size change.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OrientationMode {
    #[default]
    Portrait,
    Landscape,
    Auto,
}

impl OrientationMode {
    /// Resolves the mode against the current surface size.
    ///
    /// A square surface resolves to `Portrait`; both orientations give the same
    /// bounds in that case.
    pub fn resolve(self, width: u32, height: u32) -> Orientation {
        match self {
            Self::Portrait => Orientation::Portrait,
            Self::Landscape => Orientation::Landscape,
            Self::Auto => Orientation::from_portrait(height >= width),
        }
    }
}

impl From<Orientation> for OrientationMode {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Portrait => Self::Portrait,
            Orientation::Landscape => Self::Landscape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_flag_maps_to_orientation() {
        assert_eq!(Orientation::from(true), Orientation::Portrait);
        assert_eq!(Orientation::from(false), Orientation::Landscape);
        assert!(Orientation::Portrait.is_portrait());
        assert!(!Orientation::Landscape.is_portrait());
    }

    #[test]
    fn fixed_modes_ignore_surface_size() {
        assert_eq!(OrientationMode::Portrait.resolve(1920, 1080), Orientation::Portrait);
        assert_eq!(OrientationMode::Landscape.resolve(480, 800), Orientation::Landscape);
    }

    #[test]
    fn auto_follows_longer_axis() {
        assert_eq!(OrientationMode::Auto.resolve(480, 800), Orientation::Portrait);
        assert_eq!(OrientationMode::Auto.resolve(800, 480), Orientation::Landscape);
        assert_eq!(OrientationMode::Auto.resolve(600, 600), Orientation::Portrait);
    }
}
