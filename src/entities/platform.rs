use serde::Serialize;
use std::fmt;

/// Console platforms a game can be flagged as available on.
///
/// Form submissions refer to platforms by their fixed ids (3, 4 and 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    Ps3,
    Ps4,
    Ps5,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Self; 3] = [Self::Ps3, Self::Ps4, Self::Ps5];

    /// Look a platform up by its form id.
    #[must_use]
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            3 => Some(Self::Ps3),
            4 => Some(Self::Ps4),
            5 => Some(Self::Ps5),
            _ => None,
        }
    }

    /// Id used in form submissions
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Ps3 => 3,
            Self::Ps4 => 4,
            Self::Ps5 => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ps3 => "PS3",
            Self::Ps4 => "PS4",
            Self::Ps5 => "PS5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Platform::from_id(3), Some(Platform::Ps3));
        assert_eq!(Platform::from_id(4), Some(Platform::Ps4));
        assert_eq!(Platform::from_id(5), Some(Platform::Ps5));
        assert_eq!(Platform::from_id(2), None);
        assert_eq!(Platform::from_id(6), None);
    }

    #[test]
    fn test_id_round_trips() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_id(platform.id()), Some(platform));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::Ps3.to_string(), "PS3");
        assert_eq!(Platform::Ps5.to_string(), "PS5");
    }
}
