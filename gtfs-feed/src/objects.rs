pub use crate::enums::*;
use crate::converters::{
    Code, Color, Date, Digit, Float, Integer, OptionalCode, OptionalDate, OptionalDigit,
    OptionalFloat, OptionalInteger, OptionalText, OptionalTime, Text, Time,
};
use crate::schema::{Entity, FieldDescriptor, GtfsFile};
use crate::Error;
use chrono::{Datelike, NaiveDate, Weekday};

use std::fmt;
use std::str::FromStr;

/// Objects that have an identifier implement this trait
///
/// Those identifier are technical and should not be shown to travellers
pub trait Id {
    /// Identifier of the object
    fn id(&self) -> &str;
}

/// Elapsed time since the start of the service day
///
/// Hours can go past 23 for trips running after midnight (`25:30:00`); the value is kept
/// as is and never wrapped into a time of the next day.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hours, can exceed 23
    pub hours: u32,
    /// Minutes, between 0 and 59
    pub minutes: u32,
    /// Seconds, between 0 and 59
    pub seconds: u32,
}

impl TimeOfDay {
    /// Creates a time of day from its components
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Number of seconds since the start of the service day
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parses `H:MM:SS` or `HH:MM:SS`
    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidTime(s.to_owned());
        let mut parts = s.split(':');
        let (h, m, sec) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), Some(sec), None) => (h, m, sec),
            _ => return Err(invalid()),
        };
        let digits = |part: &str, min_len: usize| {
            (min_len..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(h, 1) || !digits(m, 2) || !digits(sec, 2) {
            return Err(invalid());
        }
        let hours = h.parse().map_err(|_| invalid())?;
        let minutes = m.parse().map_err(|_| invalid())?;
        let seconds = sec.parse().map_err(|_| invalid())?;
        if minutes > 59 || seconds > 59 {
            return Err(invalid());
        }
        Ok(TimeOfDay::new(hours, minutes, seconds))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// General informations about the agency running the network. See <https://gtfs.org/reference/static/#agencytxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Agency {
    /// Unique technical (not for the traveller) identifier for the Agency
    pub id: Option<String>,
    ///Full name of the transit agency
    pub name: String,
    /// URL of the transit agency
    pub url: String,
    /// Timezone where the transit agency is located
    pub timezone: String,
    /// Primary language used by this transit agency
    pub language_code: Option<String>,
    /// A voice telephone number for the specified agency
    pub phone: Option<String>,
    /// URL of a web page that allows a rider to purchase tickets or other fare instruments for that agency online
    pub fare_url: Option<String>,
    /// Email address actively monitored by the agency’s customer service department
    pub email: Option<String>,
}

impl Entity for Agency {
    const FILE: GtfsFile = GtfsFile::Agency;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Agency {
        optional "agency_id" => id: OptionalText;
        required "agency_name" => name: Text;
        required "agency_url" => url: Text;
        required "agency_timezone" => timezone: Text;
        optional "agency_lang" => language_code: OptionalText;
        optional "agency_phone" => phone: OptionalText;
        optional "agency_fare_url" => fare_url: OptionalText;
        optional "agency_email" => email: OptionalText;
    });
}

impl Id for Agency {
    fn id(&self) -> &str {
        match &self.id {
            None => "",
            Some(id) => id,
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A physical stop, station or area. See <https://gtfs.org/reference/static/#stopstxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Stop {
    /// Unique technical identifier (not for the traveller) of the stop
    pub id: String,
    /// Short text or a number that identifies the location for riders
    pub code: Option<String>,
    ///Name of the location. Use a name that people will understand in the local and tourist vernacular
    pub name: String,
    /// Description of the location that provides useful, quality information
    pub description: String,
    /// Latitude of the stop
    pub latitude: f64,
    /// Longitude of the stop
    pub longitude: f64,
    /// Identifies the fare zone for a stop
    pub zone_id: Option<String>,
    /// URL of a web page about the location
    pub url: String,
    /// Type of the location
    pub location_type: Option<LocationType>,
    /// Defines hierarchy between the different locations
    pub parent_station: Option<String>,
    /// Timezone of the location
    pub timezone: Option<String>,
    /// Indicates whether wheelchair boardings are possible from the location
    pub wheelchair_boarding: Option<WheelchairAccessibility>,
    /// Platform identifier for a platform stop (a stop belonging to a station)
    pub platform_code: Option<String>,
}

impl Entity for Stop {
    const FILE: GtfsFile = GtfsFile::Stops;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Stop {
        required "stop_id" => id: Text;
        optional "stop_code" => code: OptionalText;
        required "stop_name" => name: Text;
        optional "stop_desc" => description: Text;
        required "stop_lat" => latitude: Float<f64>;
        required "stop_lon" => longitude: Float<f64>;
        optional "zone_id" => zone_id: OptionalText;
        optional "stop_url" => url: Text;
        optional "location_type" => location_type: OptionalCode<LocationType>;
        optional "parent_station" => parent_station: OptionalText;
        optional "stop_timezone" => timezone: OptionalText;
        optional "wheelchair_boarding" => wheelchair_boarding: OptionalCode<WheelchairAccessibility>;
        optional "platform_code" => platform_code: OptionalText;
    });
}

impl Id for Stop {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A route is a commercial line (there can be various stop sequences for a same line). See <https://gtfs.org/reference/static/#routestxt>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Route {
    /// Unique technical (not for the traveller) identifier for the route
    pub id: String,
    /// Agency for the specified route
    pub agency_id: Option<String>,
    /// Short name of a route. This will often be a short, abstract identifier like "32", "100X", or "Green"
    pub short_name: String,
    /// Full name of a route. This name is generally more descriptive than the [Route::short_name]
    pub long_name: String,
    /// Description of a route that provides useful, quality information
    pub description: String,
    /// Indicates the type of transportation used on a route
    pub route_type: RouteType,
    /// URL of a web page about the particular route
    pub url: Option<String>,
    /// Route color designation that matches public facing material, packed as `0xFFRRGGBB`
    pub color: Option<i32>,
    /// Legible color to use for text drawn against a background of [Route::color]
    pub text_color: Option<i32>,
    /// Orders the routes in a way which is ideal for presentation to customers
    pub sort_order: Option<u32>,
    /// Indicates whether a rider can board the transit vehicle anywhere along the vehicle’s travel path
    pub continuous_pickup: Option<ContinuousPickupDropOff>,
    /// Indicates whether a rider can alight from the transit vehicle at any point along the vehicle’s travel path
    pub continuous_drop_off: Option<ContinuousPickupDropOff>,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            id: String::new(),
            agency_id: None,
            short_name: String::new(),
            long_name: String::new(),
            description: String::new(),
            route_type: RouteType::Bus,
            url: None,
            color: None,
            text_color: None,
            sort_order: None,
            continuous_pickup: None,
            continuous_drop_off: None,
        }
    }
}

impl Entity for Route {
    const FILE: GtfsFile = GtfsFile::Routes;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Route {
        required "route_id" => id: Text;
        optional "agency_id" => agency_id: OptionalText;
        optional "route_short_name" => short_name: Text;
        optional "route_long_name" => long_name: Text;
        optional "route_desc" => description: Text;
        required "route_type" => route_type: Code<RouteType>;
        optional "route_url" => url: OptionalText;
        optional "route_color" => color: Color;
        optional "route_text_color" => text_color: Color;
        optional "route_sort_order" => sort_order: OptionalInteger<u32>;
        optional "continuous_pickup" => continuous_pickup: OptionalCode<ContinuousPickupDropOff>;
        optional "continuous_drop_off" => continuous_drop_off: OptionalCode<ContinuousPickupDropOff>;
    });
}

impl Id for Route {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.long_name.is_empty() {
            write!(f, "{}", self.long_name)
        } else {
            write!(f, "{}", self.short_name)
        }
    }
}

/// A Trip is a vehicle that follows a sequence of [StopTime] on certain days. See <https://gtfs.org/reference/static/#tripstxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Trip {
    /// Unique technical identifier (not for the traveller) for the Trip
    pub id: String,
    /// References along which [Route] this trip runs
    pub route_id: String,
    /// References the [Calendar] on which this trip runs
    pub service_id: String,
    /// Text that appears on signage identifying the trip's destination to riders
    pub headsign: Option<String>,
    /// Public facing text used to identify the trip to riders, for instance, to identify train numbers for commuter rail trips
    pub short_name: Option<String>,
    /// Indicates the direction of travel for a trip. This field is not used in routing
    pub direction: Option<DirectionType>,
    /// Identifies the block to which the trip belongs
    pub block_id: Option<String>,
    /// Shape of the trip
    pub shape_id: Option<String>,
    /// Indicates wheelchair accessibility
    pub wheelchair_accessible: Option<WheelchairAccessibility>,
    /// Indicates whether bikes are allowed
    pub bikes_allowed: Option<BikesAllowed>,
}

impl Entity for Trip {
    const FILE: GtfsFile = GtfsFile::Trips;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Trip {
        required "route_id" => route_id: Text;
        required "service_id" => service_id: Text;
        required "trip_id" => id: Text;
        optional "trip_headsign" => headsign: OptionalText;
        optional "trip_short_name" => short_name: OptionalText;
        optional "direction_id" => direction: OptionalCode<DirectionType>;
        optional "block_id" => block_id: OptionalText;
        optional "shape_id" => shape_id: OptionalText;
        optional "wheelchair_accessible" => wheelchair_accessible: OptionalCode<WheelchairAccessibility>;
        optional "bikes_allowed" => bikes_allowed: OptionalCode<BikesAllowed>;
    });
}

impl Id for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "route id: {}, service id: {}",
            self.route_id, self.service_id
        )
    }
}

/// The moment where a vehicle, running on [Trip] stops at a [Stop]. See <https://gtfs.org/reference/static/#stop_timestxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct StopTime {
    /// [Trip] to which this stop time belongs to
    pub trip_id: String,
    /// Arrival time of the stop time.
    /// It's an option since the intermediate stops can have have no arrival
    /// and this arrival needs to be interpolated
    pub arrival_time: Option<TimeOfDay>,
    /// Departure time of the stop time, can be interpolated too
    pub departure_time: Option<TimeOfDay>,
    /// Identifier of the [Stop] where the vehicle stops
    pub stop_id: String,
    /// Order of stops for a particular trip. The values must increase along the trip but do not need to be consecutive
    pub stop_sequence: u32,
    /// Text that appears on signage identifying the trip's destination to riders
    pub stop_headsign: String,
    /// Indicates pickup method, `None` when not given
    pub pickup_type: Option<PickupDropOffType>,
    /// Indicates drop off method, `None` when not given
    pub drop_off_type: Option<PickupDropOffType>,
    /// Indicates whether a rider can board the transit vehicle anywhere along the vehicle’s travel path
    pub continuous_pickup: Option<ContinuousPickupDropOff>,
    /// Indicates whether a rider can alight from the transit vehicle at any point along the vehicle’s travel path
    pub continuous_drop_off: Option<ContinuousPickupDropOff>,
    /// Actual distance traveled along the associated shape, from the first stop to the stop specified in this record
    pub shape_dist_traveled: Option<f64>,
    /// `Some(true)` if the times are exact, `Some(false)` if they are approximate
    pub timepoint: Option<bool>,
}

impl Entity for StopTime {
    const FILE: GtfsFile = GtfsFile::StopTimes;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(StopTime {
        required "trip_id" => trip_id: Text;
        optional "arrival_time" => arrival_time: OptionalTime;
        optional "departure_time" => departure_time: OptionalTime;
        required "stop_id" => stop_id: Text;
        required "stop_sequence" => stop_sequence: Integer<u32>;
        optional "stop_headsign" => stop_headsign: Text;
        optional "pickup_type" => pickup_type: OptionalCode<PickupDropOffType>;
        optional "drop_off_type" => drop_off_type: OptionalCode<PickupDropOffType>;
        optional "continuous_pickup" => continuous_pickup: OptionalCode<ContinuousPickupDropOff>;
        optional "continuous_drop_off" => continuous_drop_off: OptionalCode<ContinuousPickupDropOff>;
        optional "shape_dist_traveled" => shape_dist_traveled: OptionalFloat<f64>;
        optional "timepoint" => timepoint: OptionalDigit;
    });
}

/// A calender describes on which days the vehicle runs. See <https://gtfs.org/reference/static/#calendartxt>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Calendar {
    /// Unique technical identifier (not for the traveller) of this calendar
    pub service_id: String,
    /// Does the service run on mondays
    pub monday: bool,
    /// Does the service run on tuesdays
    pub tuesday: bool,
    /// Does the service run on wednesdays
    pub wednesday: bool,
    /// Does the service run on thursdays
    pub thursday: bool,
    /// Does the service run on fridays
    pub friday: bool,
    /// Does the service run on saturdays
    pub saturday: bool,
    /// Does the service run on sundays
    pub sunday: bool,
    /// Start service day for the service interval
    pub start_date: NaiveDate,
    /// End service day for the service interval. This service day is included in the interval
    pub end_date: NaiveDate,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            monday: false,
            tuesday: false,
            wednesday: false,
            thursday: false,
            friday: false,
            saturday: false,
            sunday: false,
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MIN,
        }
    }
}

impl Entity for Calendar {
    const FILE: GtfsFile = GtfsFile::Calendar;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Calendar {
        required "service_id" => service_id: Text;
        required "monday" => monday: Digit;
        required "tuesday" => tuesday: Digit;
        required "wednesday" => wednesday: Digit;
        required "thursday" => thursday: Digit;
        required "friday" => friday: Digit;
        required "saturday" => saturday: Digit;
        required "sunday" => sunday: Digit;
        required "start_date" => start_date: Date;
        required "end_date" => end_date: Date;
    });
}

impl Id for Calendar {
    fn id(&self) -> &str {
        &self.service_id
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.start_date, self.end_date)
    }
}

impl Calendar {
    /// Returns true if there is a service running on that day
    pub fn valid_weekday(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// Defines a specific date that can be added or removed from a [Calendar]. See <https://gtfs.org/reference/static/#calendar_datestxt>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalendarDate {
    /// Identifier of the service that is modified at this date
    pub service_id: String,
    /// Date where the service will be added or removed
    pub date: NaiveDate,
    /// Is the service added or removed
    pub exception_type: ExceptionType,
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            date: NaiveDate::MIN,
            exception_type: ExceptionType::Added,
        }
    }
}

impl Entity for CalendarDate {
    const FILE: GtfsFile = GtfsFile::CalendarDates;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(CalendarDate {
        required "service_id" => service_id: Text;
        required "date" => date: Date;
        required "exception_type" => exception_type: Code<ExceptionType>;
    });
}

/// Defines one possible fare. See <https://gtfs.org/reference/static/#fare_attributestxt>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FareAttribute {
    /// Unique technical (not for the traveller) identifier for the FareAttribute
    pub fare_id: String,
    /// Fare price, in the unit specified by [FareAttribute::currency_type]
    pub price: String,
    /// Currency used to pay the fare.
    pub currency_type: String,
    ///Indicates when the fare must be paid
    pub payment_method: PaymentMethodType,
    /// Number of transfers permitted on this fare, `None` for unlimited transfers
    pub transfers: Option<u32>,
    /// Identifies the relevant agency for a fare
    pub agency_id: Option<String>,
    /// Length of time in seconds before a transfer expires
    pub transfer_duration: Option<u32>,
}

impl Default for FareAttribute {
    fn default() -> Self {
        Self {
            fare_id: String::new(),
            price: String::new(),
            currency_type: String::new(),
            payment_method: PaymentMethodType::OnBoard,
            transfers: None,
            agency_id: None,
            transfer_duration: None,
        }
    }
}

impl Entity for FareAttribute {
    const FILE: GtfsFile = GtfsFile::FareAttributes;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(FareAttribute {
        required "fare_id" => fare_id: Text;
        required "price" => price: Text;
        required "currency_type" => currency_type: Text;
        required "payment_method" => payment_method: Code<PaymentMethodType>;
        optional "transfers" => transfers: OptionalInteger<u32>;
        optional "agency_id" => agency_id: OptionalText;
        optional "transfer_duration" => transfer_duration: OptionalInteger<u32>;
    });
}

impl Id for FareAttribute {
    fn id(&self) -> &str {
        &self.fare_id
    }
}

/// Rule applying a [FareAttribute] to routes or zones. See <https://gtfs.org/reference/static/#fare_rulestxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct FareRule {
    /// The [FareAttribute] this rule applies
    pub fare_id: String,
    /// [Route] associated with the fare
    pub route_id: String,
    /// Origin zone
    pub origin_id: String,
    /// Destination zone
    pub destination_id: String,
    /// Zone that a rider will enter while using the fare
    pub contains_id: String,
}

impl Entity for FareRule {
    const FILE: GtfsFile = GtfsFile::FareRules;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(FareRule {
        required "fare_id" => fare_id: Text;
        optional "route_id" => route_id: Text;
        optional "origin_id" => origin_id: Text;
        optional "destination_id" => destination_id: Text;
        optional "contains_id" => contains_id: Text;
    });
}

/// A single geographical point decribing the shape of a [Trip]. See <https://gtfs.org/reference/static/#shapestxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Shape {
    /// Unique technical (not for the traveller) identifier for the Shape
    pub id: String,
    /// Latitude of a shape point
    pub latitude: f64,
    /// Longitude of a shape point
    pub longitude: f64,
    /// Sequence in which the shape points connect to form the shape
    pub sequence: u32,
    /// Actual distance traveled along the shape from the first shape point to the point specified in this record
    pub distance_travelled: Option<f64>,
}

impl Entity for Shape {
    const FILE: GtfsFile = GtfsFile::Shapes;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Shape {
        required "shape_id" => id: Text;
        required "shape_pt_lat" => latitude: Float<f64>;
        required "shape_pt_lon" => longitude: Float<f64>;
        required "shape_pt_sequence" => sequence: Integer<u32>;
        optional "shape_dist_traveled" => distance_travelled: OptionalFloat<f64>;
    });
}

impl Id for Shape {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Timetables can be defined by the frequency of their vehicles. See <https://gtfs.org/reference/static/#frequenciestxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Frequency {
    /// References the [Trip] that uses frequency
    pub trip_id: String,
    /// Time at which the first vehicle departs from the first stop of the trip
    pub start_time: TimeOfDay,
    /// Time at which service changes to a different headway (or ceases) at the first stop in the trip
    pub end_time: TimeOfDay,
    /// Time, in seconds, between departures from the same stop (headway) for the trip
    pub headway_secs: u32,
    /// `Some(true)` for schedule based trips, `Some(false)` for frequency based ones
    pub exact_times: Option<bool>,
}

impl Entity for Frequency {
    const FILE: GtfsFile = GtfsFile::Frequencies;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Frequency {
        required "trip_id" => trip_id: Text;
        required "start_time" => start_time: Time;
        required "end_time" => end_time: Time;
        required "headway_secs" => headway_secs: Integer<u32>;
        optional "exact_times" => exact_times: OptionalDigit;
    });
}

/// Transfer information between stops. See <https://gtfs.org/reference/static/#transferstxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Transfer {
    /// Stop from which to leave
    pub from_stop_id: String,
    /// Stop which to transfer to
    pub to_stop_id: String,
    /// Type of the transfer, `None` when not given
    pub transfer_type: Option<TransferType>,
    /// Minimum time needed to make the transfer in seconds
    pub min_transfer_time: Option<u32>,
}

impl Entity for Transfer {
    const FILE: GtfsFile = GtfsFile::Transfers;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(Transfer {
        required "from_stop_id" => from_stop_id: Text;
        required "to_stop_id" => to_stop_id: Text;
        optional "transfer_type" => transfer_type: OptionalCode<TransferType>;
        optional "min_transfer_time" => min_transfer_time: OptionalInteger<u32>;
    });
}

/// Meta-data about the feed. See <https://gtfs.org/reference/static/#feed_infotxt>
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct FeedInfo {
    /// Full name of the organization that publishes the dataset.
    pub publisher_name: String,
    /// URL of the dataset publishing organization's website
    pub publisher_url: String,
    /// Default language used for the text in this dataset
    pub lang: String,
    /// Defines the language that should be used when the data consumer doesn’t know the language of the rider
    pub default_lang: Option<String>,
    /// The dataset provides complete and reliable schedule information for service in the period from this date
    pub start_date: Option<NaiveDate>,
    ///The dataset provides complete and reliable schedule information for service in the period until this date
    pub end_date: Option<NaiveDate>,
    /// String that indicates the current version of their GTFS dataset
    pub version: Option<String>,
    /// Email address for communication regarding the GTFS dataset and data publishing practices
    pub contact_email: Option<String>,
    /// URL for contact information regarding the GTFS dataset and data publishing practices
    pub contact_url: Option<String>,
}

impl Entity for FeedInfo {
    const FILE: GtfsFile = GtfsFile::FeedInfo;
    const SCHEMA: &'static [FieldDescriptor<Self>] = schema!(FeedInfo {
        required "feed_publisher_name" => publisher_name: Text;
        required "feed_publisher_url" => publisher_url: Text;
        required "feed_lang" => lang: Text;
        optional "default_lang" => default_lang: OptionalText;
        optional "feed_start_date" => start_date: OptionalDate;
        optional "feed_end_date" => end_date: OptionalDate;
        optional "feed_version" => version: OptionalText;
        optional "feed_contact_email" => contact_email: OptionalText;
        optional "feed_contact_url" => contact_url: OptionalText;
    });
}

impl fmt::Display for FeedInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.publisher_name)
    }
}
