use std::fmt;

/// One of the fixed community rooms. Messages are never shared across rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Room {
    #[default]
    General,
    Sydney,
    Melbourne,
    Perth,
    Brisbane,
    Adelaide,
    GoldCoast,
    Canberra,
    Hobart,
    Darwin,
}

impl Room {
    pub const ALL: [Room; 10] = [
        Room::General,
        Room::Sydney,
        Room::Melbourne,
        Room::Perth,
        Room::Brisbane,
        Room::Adelaide,
        Room::GoldCoast,
        Room::Canberra,
        Room::Hobart,
        Room::Darwin,
    ];

    /// Stable key used in the store's `room` column and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Room::General => "general",
            Room::Sydney => "sydney",
            Room::Melbourne => "melbourne",
            Room::Perth => "perth",
            Room::Brisbane => "brisbane",
            Room::Adelaide => "adelaide",
            Room::GoldCoast => "goldcoast",
            Room::Canberra => "canberra",
            Room::Hobart => "hobart",
            Room::Darwin => "darwin",
        }
    }

    /// Display label shown in room listings and banners.
    pub fn label(self) -> &'static str {
        match self {
            Room::General => "Général",
            Room::Sydney => "Sydney",
            Room::Melbourne => "Melbourne",
            Room::Perth => "Perth",
            Room::Brisbane => "Brisbane",
            Room::Adelaide => "Adelaide",
            Room::GoldCoast => "Gold Coast",
            Room::Canberra => "Canberra",
            Room::Hobart => "Hobart",
            Room::Darwin => "Darwin",
        }
    }

    pub fn from_key(key: &str) -> Option<Room> {
        Room::ALL.into_iter().find(|room| room.key() == key)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
