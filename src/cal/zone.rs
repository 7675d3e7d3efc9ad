//! The time zone resolver interface, and a fixed-timespan
//! implementation of it.
//!
//! This library does not read the zoneinfo database itself. Callers
//! hand in anything implementing [`ZoneResolver`], which answers the
//! one question the calendar engine ever asks: *what offset was in
//! force in this zone at this instant, and was it daylight-saving?*

use crate::cal::offset::Offset;
use crate::error::Error;
use crate::instant::Instant;


/// What a zone lookup resolves to: the total UTC offset in force at the
/// queried instant, and whether any daylight-saving shift is part of it.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ZoneInfo {
    pub offset: Offset,
    pub is_dst: bool,
}

/// A source of time zone offsets, keyed by zone name.
///
/// Implementations are expected to be pure and total apart from
/// rejecting unknown zone names, and safe to share across threads.
pub trait ZoneResolver {

    /// Resolves the offset in force in the named zone at the given
    /// instant.
    fn resolve(&self, zone: &str, instant: Instant) -> Result<ZoneInfo, Error>;
}


/// An individual timespan with a fixed offset.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct FixedTimespan {

    /// The *total* offset in force during this timespan: the zone’s
    /// standard offset from UTC plus any daylight-saving shift.
    pub offset: i32,

    /// Whether a daylight-saving shift is part of the offset.
    pub is_dst: bool,

    /// The abbreviation in use during this timespan, such as “GMT” or
    /// “PDT”. Notoriously vague; display-only.
    pub abbreviation: &'static str,
}

/// A **fixed timespan zone** is one named zone as a list of timespans,
/// separated by the instants at which one offset hands over to the
/// next. There is always one more timespan than there are transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedTimespanZone {

    /// This zone’s name, such as “Europe/Warsaw”.
    pub name: &'static str,

    /// The timespan in force up until the first transition.
    pub first: FixedTimespan,

    /// The remaining timespans, each paired with the Unix timestamp at
    /// which it takes over from the previous one.
    pub rest: Vec<(i64, FixedTimespan)>,
}

impl FixedTimespanZone {
    fn find(&self, time: i64) -> &FixedTimespan {
        match self.rest.iter().take_while(|t| t.0 <= time).last() {
            None     => &self.first,
            Some(zd) => &zd.1,
        }
    }
}


/// A resolver over a set of fixed-timespan zones. Enough for tests and
/// for callers whose zones are known up front; anything reading the
/// real zoneinfo database can implement [`ZoneResolver`] instead.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct FixedZoneTable {
    zones: Vec<FixedTimespanZone>,
}

impl FixedZoneTable {

    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zone to the table, builder-style.
    pub fn with_zone(mut self, zone: FixedTimespanZone) -> Self {
        self.zones.push(zone);
        self
    }
}

impl ZoneResolver for FixedZoneTable {
    fn resolve(&self, zone: &str, instant: Instant) -> Result<ZoneInfo, Error> {
        let found = self.zones.iter().find(|z| z.name == zone)
            .ok_or_else(|| Error::UnknownZone { name: zone.into() })?;

        let span = found.find(instant.seconds());
        Ok(ZoneInfo {
            offset: Offset::of_seconds(span.offset)?,
            is_dst: span.is_dst,
        })
    }
}
