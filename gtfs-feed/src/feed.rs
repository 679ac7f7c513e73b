use crate::{objects::*, Error, GtfsReader};

/// Receives the entities as they are read
///
/// The reading engine calls the `add_*` method matching each row, in file order.
pub trait GtfsFeed: Default {
    /// Adds an [Agency]
    fn add_agency(&mut self, agency: Agency);
    /// Adds a [Stop]
    fn add_stop(&mut self, stop: Stop);
    /// Adds a [Route]
    fn add_route(&mut self, route: Route);
    /// Adds a [Trip]
    fn add_trip(&mut self, trip: Trip);
    /// Adds a [StopTime]
    fn add_stop_time(&mut self, stop_time: StopTime);
    /// Adds a [Calendar]
    fn add_calendar(&mut self, calendar: Calendar);
    /// Adds a [CalendarDate]
    fn add_calendar_date(&mut self, calendar_date: CalendarDate);
    /// Adds a [FareAttribute]
    fn add_fare_attribute(&mut self, fare_attribute: FareAttribute);
    /// Adds a [FareRule]
    fn add_fare_rule(&mut self, fare_rule: FareRule);
    /// Adds a [Shape] point
    fn add_shape(&mut self, shape: Shape);
    /// Adds a [Frequency]
    fn add_frequency(&mut self, frequency: Frequency);
    /// Adds a [Transfer]
    fn add_transfer(&mut self, transfer: Transfer);
    /// Adds a [FeedInfo]
    fn add_feed_info(&mut self, feed_info: FeedInfo);

    /// Called once the whole source has been read, with the logical names of its files
    /// and the time spent reading in milliseconds
    fn record_source(&mut self, _files: Vec<String>, _read_duration: i64) {}
}

/// Data structure with all the GTFS objects
///
/// Every collection keeps the order of its file. No relationship between objects is checked.
///
/// This is probably the entry point you want to use:
/// ```
/// let feed = gtfs_feed::Feed::from_path("fixtures/sample-feed")?;
/// assert_eq!(feed.stops.len(), 9);
/// # Ok::<(), gtfs_feed::Error>(())
/// ```
///
/// If you want to configure the behaviour (e.g. skipping [StopTime]), see [crate::GtfsReader]
#[derive(Debug, Default, Clone, Serialize)]
pub struct Feed {
    /// Time needed to read and parse the files in milliseconds
    pub read_duration: i64,
    /// Logical names of the files of the source
    pub files: Vec<String>,
    /// All agencies
    pub agencies: Vec<Agency>,
    /// All stops
    pub stops: Vec<Stop>,
    /// All routes
    pub routes: Vec<Route>,
    /// All trips
    pub trips: Vec<Trip>,
    /// All stop times
    pub stop_times: Vec<StopTime>,
    /// All calendars
    pub calendars: Vec<Calendar>,
    /// All calendar dates
    pub calendar_dates: Vec<CalendarDate>,
    /// All fare attributes
    pub fare_attributes: Vec<FareAttribute>,
    /// All fare rules
    pub fare_rules: Vec<FareRule>,
    /// All shape points
    pub shapes: Vec<Shape>,
    /// All frequencies
    pub frequencies: Vec<Frequency>,
    /// All transfers
    pub transfers: Vec<Transfer>,
    /// All feed information. There is no identifier
    pub feed_info: Vec<FeedInfo>,
}

impl GtfsFeed for Feed {
    fn add_agency(&mut self, agency: Agency) {
        self.agencies.push(agency);
    }

    fn add_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    fn add_stop_time(&mut self, stop_time: StopTime) {
        self.stop_times.push(stop_time);
    }

    fn add_calendar(&mut self, calendar: Calendar) {
        self.calendars.push(calendar);
    }

    fn add_calendar_date(&mut self, calendar_date: CalendarDate) {
        self.calendar_dates.push(calendar_date);
    }

    fn add_fare_attribute(&mut self, fare_attribute: FareAttribute) {
        self.fare_attributes.push(fare_attribute);
    }

    fn add_fare_rule(&mut self, fare_rule: FareRule) {
        self.fare_rules.push(fare_rule);
    }

    fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    fn add_frequency(&mut self, frequency: Frequency) {
        self.frequencies.push(frequency);
    }

    fn add_transfer(&mut self, transfer: Transfer) {
        self.transfers.push(transfer);
    }

    fn add_feed_info(&mut self, feed_info: FeedInfo) {
        self.feed_info.push(feed_info);
    }

    fn record_source(&mut self, files: Vec<String>, read_duration: i64) {
        self.files = files;
        self.read_duration = read_duration;
    }
}

fn find_by_id<'a, T: Id>(objects: &'a [T], id: &str) -> Result<&'a T, Error> {
    objects
        .iter()
        .find(|o| o.id() == id)
        .ok_or_else(|| Error::ReferenceError(id.to_owned()))
}

impl Feed {
    /// Prints on stdout some basic statistics about the GTFS file (numbers of elements for each object). Mostly to be sure that everything was read
    pub fn print_stats(&self) {
        println!("GTFS data:");
        println!("  Read in {} ms", self.read_duration);
        println!("  Files: {}", self.files.join(", "));
        println!("  Agencies: {}", self.agencies.len());
        println!("  Stops: {}", self.stops.len());
        println!("  Routes: {}", self.routes.len());
        println!("  Trips: {}", self.trips.len());
        println!("  Stop times: {}", self.stop_times.len());
        println!("  Calendars: {}", self.calendars.len());
        println!("  Calendar dates: {}", self.calendar_dates.len());
        println!("  Fare attributes: {}", self.fare_attributes.len());
        println!("  Fare rules: {}", self.fare_rules.len());
        println!("  Shapes: {}", self.shapes.len());
        println!("  Frequencies: {}", self.frequencies.len());
        println!("  Transfers: {}", self.transfers.len());
        println!("  Feed info: {}", self.feed_info.len());
    }

    /// Reads the GTFS from a local zip archive or local directory, with the default (strict) [GtfsReader]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Feed, Error> {
        GtfsReader::default().read_from_path(path)
    }

    /// Gets an [Agency] by its `agency_id`
    pub fn get_agency<'a>(&'a self, id: &str) -> Result<&'a Agency, Error> {
        find_by_id(&self.agencies, id)
    }

    /// Gets a [Stop] by its `stop_id`
    pub fn get_stop<'a>(&'a self, id: &str) -> Result<&'a Stop, Error> {
        find_by_id(&self.stops, id)
    }

    /// Gets a [Route] by its `route_id`
    pub fn get_route<'a>(&'a self, id: &str) -> Result<&'a Route, Error> {
        find_by_id(&self.routes, id)
    }

    /// Gets a [Trip] by its `trip_id`
    pub fn get_trip<'a>(&'a self, id: &str) -> Result<&'a Trip, Error> {
        find_by_id(&self.trips, id)
    }

    /// Gets a [Calendar] by its `service_id`
    pub fn get_calendar<'a>(&'a self, id: &str) -> Result<&'a Calendar, Error> {
        find_by_id(&self.calendars, id)
    }

    /// Gets a [FareAttribute] by its `fare_id`
    pub fn get_fare_attribute<'a>(&'a self, id: &str) -> Result<&'a FareAttribute, Error> {
        find_by_id(&self.fare_attributes, id)
    }

    /// Gets all the [CalendarDate] of a `service_id`, in file order
    pub fn get_calendar_dates<'a>(&'a self, service_id: &str) -> Vec<&'a CalendarDate> {
        self.calendar_dates
            .iter()
            .filter(|c| c.service_id == service_id)
            .collect()
    }

    /// Gets all the points of a shape, ordered by `shape_pt_sequence`
    pub fn get_shapes<'a>(&'a self, shape_id: &str) -> Vec<&'a Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.iter().filter(|s| s.id == shape_id).collect();
        shapes.sort_by_key(|s| s.sequence);
        shapes
    }
}
