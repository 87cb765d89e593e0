//! Viewer time zone
//!
//! Either a configured fixed offset or the system zone. The system zone is
//! resolved per instant, so deadlines across a DST change keep the offset in
//! force at that instant.

use chrono::{FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use std::fmt;

/// Zone used to render and read back wall-clock times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerZone {
    /// The system zone, including its DST rules
    #[default]
    System,
    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

/// Offset of a [`ViewerZone`] at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOffset {
    zone: ViewerZone,
    fixed: FixedOffset,
}

impl ViewerOffset {
    fn new(zone: ViewerZone, fixed: FixedOffset) -> Self {
        Self { zone, fixed }
    }
}

impl Offset for ViewerOffset {
    fn fix(&self) -> FixedOffset {
        self.fixed
    }
}

impl fmt::Display for ViewerOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fixed, f)
    }
}

impl fmt::Display for ViewerZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Fixed(offset) => fmt::Display::fmt(offset, f),
        }
    }
}

impl TimeZone for ViewerZone {
    type Offset = ViewerOffset;

    fn from_offset(offset: &ViewerOffset) -> Self {
        offset.zone
    }

    #[allow(deprecated)]
    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ViewerOffset> {
        let zone = *self;
        match self {
            Self::System => Local.offset_from_local_date(local),
            Self::Fixed(offset) => offset.offset_from_local_date(local),
        }
        .map(|fixed| ViewerOffset::new(zone, fixed))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ViewerOffset> {
        let zone = *self;
        match self {
            Self::System => Local.offset_from_local_datetime(local),
            Self::Fixed(offset) => offset.offset_from_local_datetime(local),
        }
        .map(|fixed| ViewerOffset::new(zone, fixed))
    }

    #[allow(deprecated)]
    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ViewerOffset {
        let fixed = match self {
            Self::System => Local.offset_from_utc_date(utc),
            Self::Fixed(offset) => offset.offset_from_utc_date(utc),
        };
        ViewerOffset::new(*self, fixed)
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ViewerOffset {
        let fixed = match self {
            Self::System => Local.offset_from_utc_datetime(utc),
            Self::Fixed(offset) => offset.offset_from_utc_datetime(utc),
        };
        ViewerOffset::new(*self, fixed)
    }
}
