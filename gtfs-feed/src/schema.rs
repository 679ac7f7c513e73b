//! Per entity type column tables
//!
//! Each entity declares, once, which column feeds which field, with which converter
//! and whether the column is required. The reader and the row mapper only ever walk
//! those tables, there is no per-file parsing code.
use crate::converters::ConverterId;
use crate::error::ConversionError;

/// Describes how one column maps to one field of `E`
pub struct FieldDescriptor<E> {
    /// Column name, as written in the header of the file
    pub column: &'static str,
    /// A required column must be present in the header and non-empty on every row
    pub required: bool,
    /// Converter used for the column
    pub converter: ConverterId,
    /// Parses the raw value and stores it in the entity
    pub read: fn(&mut E, &str) -> Result<(), ConversionError>,
    /// Formats the field of the entity back as a raw value
    pub write: fn(&E) -> String,
}

impl<E> std::fmt::Debug for FieldDescriptor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("column", &self.column)
            .field("required", &self.required)
            .field("converter", &self.converter)
            .finish()
    }
}

/// A record type read from one GTFS file
pub trait Entity: Default + Sized + 'static {
    /// File holding the entities
    const FILE: GtfsFile;
    /// Ordered column table of the entity
    const SCHEMA: &'static [FieldDescriptor<Self>];

    /// Names of the columns, in schema order
    fn columns() -> Vec<&'static str> {
        Self::SCHEMA.iter().map(|f| f.column).collect()
    }
}

/// All the files from the GTFS specification that this library reads
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GtfsFile {
    /// [crate::Agency] <https://gtfs.org/reference/static/#agencytxt>
    Agency,
    /// [crate::Stop] <https://gtfs.org/reference/static/#stopstxt>
    Stops,
    /// [crate::Route] <https://gtfs.org/reference/static/#routestxt>
    Routes,
    /// [crate::Trip] <https://gtfs.org/reference/static/#tripstxt>
    Trips,
    /// [crate::StopTime] <https://gtfs.org/reference/static/#stop_timestxt>
    StopTimes,
    /// [crate::Calendar] <https://gtfs.org/reference/static/#calendartxt>
    Calendar,
    /// [crate::CalendarDate] <https://gtfs.org/reference/static/#calendar_datestxt>
    CalendarDates,
    /// [crate::FareAttribute] <https://gtfs.org/reference/static/#fare_attributestxt>
    FareAttributes,
    /// [crate::FareRule] <https://gtfs.org/reference/static/#fare_rulestxt>
    FareRules,
    /// [crate::Shape] <https://gtfs.org/reference/static/#shapestxt>
    Shapes,
    /// [crate::Frequency] <https://gtfs.org/reference/static/#frequenciestxt>
    Frequencies,
    /// [crate::Transfer] <https://gtfs.org/reference/static/#transferstxt>
    Transfers,
    /// [crate::FeedInfo] <https://gtfs.org/reference/static/#feed_infotxt>
    FeedInfo,
}

impl GtfsFile {
    /// Every file, in reading order
    pub const ALL: [GtfsFile; 13] = [
        GtfsFile::Agency,
        GtfsFile::Stops,
        GtfsFile::Routes,
        GtfsFile::Trips,
        GtfsFile::StopTimes,
        GtfsFile::Calendar,
        GtfsFile::CalendarDates,
        GtfsFile::FareAttributes,
        GtfsFile::FareRules,
        GtfsFile::Shapes,
        GtfsFile::Frequencies,
        GtfsFile::Transfers,
        GtfsFile::FeedInfo,
    ];

    /// Files a feed cannot be complete without
    pub const REQUIRED: [GtfsFile; 5] = [
        GtfsFile::Agency,
        GtfsFile::Stops,
        GtfsFile::Routes,
        GtfsFile::Trips,
        GtfsFile::StopTimes,
    ];

    /// Logical name of the file, without extension
    pub fn name(self) -> &'static str {
        match self {
            GtfsFile::Agency => "agency",
            GtfsFile::Stops => "stops",
            GtfsFile::Routes => "routes",
            GtfsFile::Trips => "trips",
            GtfsFile::StopTimes => "stop_times",
            GtfsFile::Calendar => "calendar",
            GtfsFile::CalendarDates => "calendar_dates",
            GtfsFile::FareAttributes => "fare_attributes",
            GtfsFile::FareRules => "fare_rules",
            GtfsFile::Shapes => "shapes",
            GtfsFile::Frequencies => "frequencies",
            GtfsFile::Transfers => "transfers",
            GtfsFile::FeedInfo => "feed_info",
        }
    }

    /// Finds the file from its logical name, ignoring case
    pub fn from_name(name: &str) -> Option<GtfsFile> {
        GtfsFile::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for GtfsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builds the `SCHEMA` table of an [Entity]
///
/// ```ignore
/// schema!(Agency {
///     optional "agency_id" => id: OptionalText;
///     required "agency_name" => name: Text;
/// })
/// ```
macro_rules! schema {
    (@required required) => {
        true
    };
    (@required optional) => {
        false
    };
    ($entity:ident { $( $req:ident $column:literal => $field:ident : $conv:ty );+ $(;)? }) => {
        &[
            $(
                $crate::schema::FieldDescriptor {
                    column: $column,
                    required: schema!(@required $req),
                    converter: <$conv as $crate::converters::Converter>::ID,
                    read: {
                        fn read(
                            entity: &mut $entity,
                            raw: &str,
                        ) -> Result<(), $crate::error::ConversionError> {
                            entity.$field = <$conv as $crate::converters::Converter>::parse(raw)?;
                            Ok(())
                        }
                        read
                    },
                    write: {
                        fn write(entity: &$entity) -> String {
                            <$conv as $crate::converters::Converter>::format(&entity.$field)
                        }
                        write
                    },
                }
            ),+
        ]
    };
}
