use bitflags::bitflags;

bitflags! {
    /// Selects which memory test suites a harness run executes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SuiteMask: u32 {
        const COPY = 1 << 0;
        const MOVE = 1 << 1;
        const CLEAR = 1 << 2;
        const SET = 1 << 3;
        /// 4- and 8-byte hinted aliases against their base routine.
        const HINTS = 1 << 4;
        const ALL = Self::COPY.bits()
            | Self::MOVE.bits()
            | Self::CLEAR.bits()
            | Self::SET.bits()
            | Self::HINTS.bits();
    }
}

pub const SUITE_COPY: SuiteMask = SuiteMask::COPY;
pub const SUITE_MOVE: SuiteMask = SuiteMask::MOVE;
pub const SUITE_CLEAR: SuiteMask = SuiteMask::CLEAR;
pub const SUITE_SET: SuiteMask = SuiteMask::SET;
pub const SUITE_HINTS: SuiteMask = SuiteMask::HINTS;
pub const SUITE_ALL: SuiteMask = SuiteMask::ALL;

const SUITE_NAMES: [(&str, SuiteMask); 5] = [
    ("copy", SuiteMask::COPY),
    ("move", SuiteMask::MOVE),
    ("clear", SuiteMask::CLEAR),
    ("set", SuiteMask::SET),
    ("hints", SuiteMask::HINTS),
];

impl SuiteMask {
    /// Parse `all`, `none`/`off`, or suite names joined with `+`
    /// (`copy+move`). Returns `None` if any component is unknown.
    pub fn parse_suites(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("all") {
            return Some(Self::ALL);
        }
        if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("off") {
            return Some(Self::empty());
        }

        let mut mask = Self::empty();
        for part in value.split('+') {
            let (_, bit) = SUITE_NAMES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))?;
            mask |= *bit;
        }
        Some(mask)
    }

    /// Short name for logs: a single suite name, `all`, `none` or `custom`.
    pub fn name(self) -> &'static str {
        if self.is_empty() {
            return "none";
        }
        if self == Self::ALL {
            return "all";
        }
        SUITE_NAMES
            .iter()
            .find(|(_, bit)| *bit == self)
            .map_or("custom", |&(name, _)| name)
    }
}
