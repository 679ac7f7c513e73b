use crate::objects::*;
use crate::row_mapper::{header, map_row, to_record, HeaderIndex};
use crate::{
    DirectorySource, Entity, Error, Feed, GtfsFile, GtfsReader, MemorySource, Strictness,
    ZipSource,
};
use chrono::NaiveDate;
use std::io::Write;

const SAMPLE: &str = "fixtures/sample-feed";

fn sample() -> Feed {
    Feed::from_path(SAMPLE).expect("impossible to read gtfs")
}

#[test]
fn serialization_deserialization() {
    let feed = sample();

    let string = serde_json::to_string(&feed.routes).unwrap();
    let parsed: Vec<Route> = serde_json::from_str(&string).unwrap();
    assert_eq!(feed.routes, parsed);

    let string = serde_json::to_string(&feed.stop_times).unwrap();
    let parsed: Vec<StopTime> = serde_json::from_str(&string).unwrap();
    assert_eq!(feed.stop_times, parsed);

    let string = serde_json::to_string(&feed.calendars).unwrap();
    let parsed: Vec<Calendar> = serde_json::from_str(&string).unwrap();
    assert_eq!(feed.calendars, parsed);
}

#[test]
fn read_agency() {
    let feed = sample();
    assert_eq!(1, feed.agencies.len());
    let agency = &feed.agencies[0];
    assert_eq!(Some("DTA".to_owned()), agency.id);
    assert_eq!("Demo Transit Authority", agency.name);
    assert_eq!("http://google.com", agency.url);
    assert_eq!("America/Los_Angeles", agency.timezone);
    assert_eq!(None, agency.fare_url);
    assert_eq!(None, agency.phone);
    assert_eq!(None, agency.language_code);
    assert_eq!("Demo Transit Authority", format!("{}", agency));
}

#[test]
fn read_stops() {
    let feed = sample();
    assert_eq!(9, feed.stops.len());

    let first = &feed.stops[0];
    assert_eq!("FUR_CREEK_RES", first.id);
    assert_eq!("Furnace Creek Resort (Demo)", first.name);
    assert_eq!(36.425288, first.latitude);
    assert_eq!(-117.133162, first.longitude);
    // Non nullable text is empty, nullable text is None
    assert_eq!("", first.description);
    assert_eq!("", first.url);
    assert_eq!(None, first.zone_id);
    assert_eq!(None, first.location_type);

    let last = &feed.stops[8];
    assert_eq!("AMV", last.id);
    assert_eq!(36.641496, last.latitude);
    assert_eq!(-116.40094, last.longitude);
}

#[test]
fn read_routes() {
    let feed = sample();
    assert_eq!(5, feed.routes.len());
    let ids: Vec<&str> = feed.routes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(vec!["AB", "BFC", "STBA", "CITY", "AAMV"], ids);

    let route = feed.get_route("AB").unwrap();
    assert_eq!(Some("DTA".to_owned()), route.agency_id);
    assert_eq!("10", route.short_name);
    assert_eq!("Airport - Bullfrog", route.long_name);
    assert_eq!("", route.description);
    assert_eq!(RouteType::Bus, route.route_type);
    assert_eq!(None, route.url);
    assert_eq!(Some(-3932017), route.color);
    assert_eq!(None, route.text_color);

    assert_eq!(Some(-1), feed.get_route("BFC").unwrap().color);
    assert_eq!(None, feed.get_route("CITY").unwrap().color);
}

#[test]
fn read_trips() {
    let feed = sample();
    assert_eq!(11, feed.trips.len());
    let ids: Vec<&str> = feed.trips.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        vec!["AB1", "AB2", "STBA", "CITY1", "CITY2", "BFC1", "BFC2", "AAMV1", "AAMV2", "AAMV3", "AAMV4"],
        ids
    );

    let trip = &feed.trips[0];
    assert_eq!("AB", trip.route_id);
    assert_eq!("FULLW", trip.service_id);
    assert_eq!(Some("to Bullfrog".to_owned()), trip.headsign);
    assert_eq!(Some(DirectionType::OneDirection), trip.direction);
    assert_eq!(Some("1".to_owned()), trip.block_id);
    assert_eq!(Some("shape_1".to_owned()), trip.shape_id);

    let shuttle = feed.get_trip("STBA").unwrap();
    assert_eq!(None, shuttle.direction);
    assert_eq!(None, shuttle.block_id);
    assert_eq!("WE", feed.trips[10].service_id);
}

#[test]
fn read_stop_times() {
    let feed = sample();
    assert_eq!(28, feed.stop_times.len());

    let stop_time = &feed.stop_times[10];
    assert_eq!("CITY2", stop_time.trip_id);
    assert_eq!(Some(TimeOfDay::new(6, 49, 0)), stop_time.arrival_time);
    assert_eq!(Some(TimeOfDay::new(6, 51, 0)), stop_time.departure_time);
    assert_eq!("NANAA", stop_time.stop_id);
    assert_eq!(4, stop_time.stop_sequence);
    assert_eq!("", stop_time.stop_headsign);
    // Absent codes are not turned into a default variant
    assert_eq!(None, stop_time.pickup_type);
    assert_eq!(None, stop_time.drop_off_type);
    assert_eq!(None, stop_time.shape_dist_traveled);

    // Rows shorter than the header
    let short = &feed.stop_times[27];
    assert_eq!("AAMV4", short.trip_id);
    assert_eq!(Some(TimeOfDay::new(16, 0, 0)), short.arrival_time);
    assert_eq!("BEATTY_AIRPORT", short.stop_id);
}

#[test]
fn read_calendar() {
    let feed = sample();
    assert_eq!(2, feed.calendars.len());
    let calendar = feed.get_calendar("FULLW").unwrap();
    assert!(calendar.monday);
    assert!(calendar.tuesday);
    assert!(calendar.wednesday);
    assert!(calendar.thursday);
    assert!(calendar.friday);
    assert!(calendar.saturday);
    assert!(calendar.sunday);
    assert_eq!(NaiveDate::from_ymd_opt(2007, 1, 1).unwrap(), calendar.start_date);
    assert_eq!(NaiveDate::from_ymd_opt(2010, 12, 31).unwrap(), calendar.end_date);

    let week_end = feed.get_calendar("WE").unwrap();
    assert!(!week_end.valid_weekday(NaiveDate::from_ymd_opt(2008, 6, 4).unwrap()));
    assert!(week_end.valid_weekday(NaiveDate::from_ymd_opt(2008, 6, 7).unwrap()));
}

#[test]
fn read_calendar_dates() {
    let feed = sample();
    assert_eq!(1, feed.calendar_dates.len());
    let dates = feed.get_calendar_dates("FULLW");
    assert_eq!(1, dates.len());
    assert_eq!(NaiveDate::from_ymd_opt(2007, 6, 4).unwrap(), dates[0].date);
    assert_eq!(ExceptionType::Removed, dates[0].exception_type);
    assert!(feed.get_calendar_dates("WE").is_empty());
}

#[test]
fn read_fares() {
    let feed = sample();
    assert_eq!(2, feed.fare_attributes.len());
    let fare = feed.get_fare_attribute("p").unwrap();
    assert_eq!("1.25", fare.price);
    assert_eq!("USD", fare.currency_type);
    assert_eq!(PaymentMethodType::OnBoard, fare.payment_method);
    assert_eq!(Some(0), fare.transfers);
    assert_eq!(None, fare.transfer_duration);

    assert_eq!(4, feed.fare_rules.len());
    assert_eq!("p", feed.fare_rules[0].fare_id);
    assert_eq!("AB", feed.fare_rules[0].route_id);
    assert_eq!("", feed.fare_rules[0].origin_id);
    assert_eq!("AAMV", feed.fare_rules[3].route_id);
}

#[test]
fn read_frequencies() {
    let feed = sample();
    assert_eq!(11, feed.frequencies.len());
    let frequency = &feed.frequencies[8];
    assert_eq!("CITY2", frequency.trip_id);
    assert_eq!(TimeOfDay::new(16, 0, 0), frequency.start_time);
    assert_eq!(TimeOfDay::new(18, 59, 59), frequency.end_time);
    assert_eq!(600, frequency.headway_secs);
    assert_eq!(None, frequency.exact_times);
}

#[test]
fn read_shapes() {
    let feed = sample();
    assert_eq!(8, feed.shapes.len());
    let shape = feed.get_shapes("shape_1");
    assert_eq!(4, shape.len());
    assert_eq!(Some(1.6), shape[1].distance_travelled);

    let sequences: Vec<u32> = feed
        .get_shapes("shape_3")
        .iter()
        .map(|s| s.sequence)
        .collect();
    assert_eq!(vec![1, 2, 3, 4], sequences);
    // The collection itself keeps the file order
    assert_eq!(4, feed.shapes[6].sequence);
    assert!(feed.get_shapes("shape_2").is_empty());
}

#[test]
fn read_transfers_and_feed_info() {
    let feed = sample();
    assert_eq!(2, feed.transfers.len());
    assert_eq!(Some(TransferType::MinimumTime), feed.transfers[0].transfer_type);
    assert_eq!(Some(300), feed.transfers[0].min_transfer_time);
    assert_eq!(Some(TransferType::Recommended), feed.transfers[1].transfer_type);
    assert_eq!(None, feed.transfers[1].min_transfer_time);

    assert_eq!(1, feed.feed_info.len());
    let info = &feed.feed_info[0];
    assert_eq!("en", info.lang);
    assert_eq!(Some("1.0".to_owned()), info.version);
    assert_eq!(NaiveDate::from_ymd_opt(2010, 12, 31), info.end_date);
    assert_eq!(None, info.default_lang);
}

#[test]
fn read_files_and_duration() {
    let feed = sample();
    assert_eq!(13, feed.files.len());
    assert!(feed.files.contains(&"stop_times".to_owned()));
    assert!(feed.read_duration >= 0);
}

#[test]
fn unknown_references() {
    let feed = sample();
    assert!(matches!(
        feed.get_stop("Utopia"),
        Err(Error::ReferenceError(id)) if id == "Utopia"
    ));
    assert!(feed.get_agency("DTA").is_ok());
}

#[test]
fn read_without_stop_times() {
    let feed: Feed = GtfsReader::default()
        .read_stop_times(false)
        .read_from_path(SAMPLE)
        .unwrap();
    assert_eq!(0, feed.stop_times.len());
    assert_eq!(11, feed.trips.len());
}

#[test]
fn read_file_by_file() {
    let mut source = DirectorySource::new(SAMPLE).unwrap();
    let reader = GtfsReader::default();
    let feed: Feed = reader.read_file(&mut source, GtfsFile::Calendar).unwrap();
    assert_eq!(2, feed.calendars.len());
    assert!(feed.agencies.is_empty());

    let feed: Feed = reader.read_file(&mut source, GtfsFile::Stops).unwrap();
    assert_eq!(9, feed.stops.len());
}

#[test]
fn strict_read_fails_on_invalid_row() {
    match Feed::from_path("fixtures/invalid-stops") {
        Err(Error::RequiredFieldMissing {
            file_name,
            field_name,
            line,
        }) => {
            assert_eq!("stops", file_name);
            assert_eq!("stop_name", field_name);
            assert_eq!(3, line);
        }
        other => panic!("unexpected result {:?}", other.map(|f| f.stops.len())),
    }
}

#[test]
fn tolerant_read_skips_invalid_rows() {
    let feed: Feed = GtfsReader::new(false)
        .read_from_path("fixtures/invalid-stops")
        .unwrap();
    let ids: Vec<&str> = feed.stops.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(vec!["FUR_CREEK_RES", "BULLFROG"], ids);
    assert_eq!(5, feed.routes.len());
}

#[test]
fn late_night_times() {
    let mut source = MemorySource::new().with(
        "stop_times.txt",
        "trip_id,arrival_time,departure_time,stop_id,stop_sequence,pickup_type,drop_off_type,timepoint\n\
         NIGHT,25:30:00,25:31:00,STAGECOACH,7,0,1,1\n",
    );
    let feed: Feed = GtfsReader::default()
        .read_file(&mut source, GtfsFile::StopTimes)
        .unwrap();
    let stop_time = &feed.stop_times[0];
    let arrival = stop_time.arrival_time.unwrap();
    assert_eq!(25, arrival.hours);
    assert_eq!(30, arrival.minutes);
    assert_eq!("25:31:00", stop_time.departure_time.unwrap().to_string());
    assert_eq!(Some(PickupDropOffType::Regular), stop_time.pickup_type);
    assert_eq!(Some(PickupDropOffType::NotAvailable), stop_time.drop_off_type);
    assert_eq!(Some(true), stop_time.timepoint);
}

#[test]
fn quoted_fields() {
    let mut source = MemorySource::new().with(
        "agency.txt",
        "agency_id,agency_name,agency_url,agency_timezone,agency_phone\n\
         DTA,\"Demo, \"\"Transit\"\" Authority\",http://google.com,America/Los_Angeles,\"555, ext 1\"\n",
    );
    let feed: Feed = GtfsReader::default()
        .read_file(&mut source, GtfsFile::Agency)
        .unwrap();
    assert_eq!("Demo, \"Transit\" Authority", feed.agencies[0].name);
    assert_eq!(Some("555, ext 1".to_owned()), feed.agencies[0].phone);
}

#[test]
fn unknown_route_type() {
    let content = "route_id,route_short_name,route_type\nAB,10,3\nXX,99,42\n";

    let mut source = MemorySource::new().with("routes.txt", content);
    let res: Result<Feed, Error> = GtfsReader::default().read_file(&mut source, GtfsFile::Routes);
    assert!(matches!(res, Err(Error::MalformedValue { line: 3, .. })));

    let feed: Feed = GtfsReader::new(false)
        .read_file(&mut source, GtfsFile::Routes)
        .unwrap();
    assert_eq!(1, feed.routes.len());
    assert_eq!(RouteType::Bus, feed.routes[0].route_type);
}

#[test]
fn tolerant_read_keeps_row_with_invalid_optional_value() {
    let mut source = MemorySource::new().with(
        "trips.txt",
        "route_id,service_id,trip_id,direction_id\nAB,FULLW,AB1,7\n",
    );
    let res: Result<Feed, Error> = GtfsReader::default().read_file(&mut source, GtfsFile::Trips);
    assert!(matches!(res, Err(Error::MalformedValue { .. })));

    let feed: Feed = GtfsReader::new(false)
        .read_file(&mut source, GtfsFile::Trips)
        .unwrap();
    assert_eq!(1, feed.trips.len());
    assert_eq!(None, feed.trips[0].direction);
}

#[test]
fn directory_with_upper_case_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        format!("{}/agency.txt", SAMPLE),
        dir.path().join("AGENCY.TXT"),
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.md"), "not a gtfs file").unwrap();

    let mut source = DirectorySource::new(dir.path()).unwrap();
    let feed: Feed = GtfsReader::default()
        .required_files(vec![GtfsFile::Agency])
        .read(&mut source)
        .unwrap();
    assert_eq!(1, feed.agencies.len());
    assert_eq!(vec!["agency".to_owned()], feed.files);
}

#[test]
fn read_zip() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("gtfs.zip");
    {
        let file = std::fs::File::create(&zip_path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::FileOptions::default();
        for name in ["agency", "stops", "routes", "trips", "stop_times"] {
            let content = std::fs::read(format!("{}/{}.txt", SAMPLE, name)).unwrap();
            zip.start_file(format!("feed/{}.txt", name), options).unwrap();
            zip.write_all(&content).unwrap();
        }
        zip.start_file("__MACOSX/feed/._agency.txt", options).unwrap();
        zip.write_all(b"\x00\x05\x16\x07").unwrap();
        zip.finish().unwrap();
    }

    let source = ZipSource::from_path(&zip_path).unwrap();
    assert_eq!(64, source.sha256().len());
    assert_eq!(6, source.files().len());

    let feed = Feed::from_path(&zip_path).unwrap();
    assert_eq!(1, feed.agencies.len());
    assert_eq!(9, feed.stops.len());
    assert_eq!(28, feed.stop_times.len());
    assert!(feed.calendars.is_empty());
}

#[test]
fn not_a_path() {
    assert!(matches!(
        Feed::from_path("fixtures/nowhere"),
        Err(Error::NotFileNorDirectory(_))
    ));
}

fn assert_round_trip<E: Entity + PartialEq + std::fmt::Debug>(objects: &[E]) {
    let index = HeaderIndex::from(&header::<E>());
    for object in objects {
        let record = to_record(object);
        let read: E = map_row(&record, &index, E::FILE.name(), Strictness::Strict).unwrap();
        assert_eq!(object, &read);
    }
}

#[test]
fn round_trip() {
    let feed = sample();
    assert_round_trip(&feed.agencies);
    assert_round_trip(&feed.stops);
    assert_round_trip(&feed.routes);
    assert_round_trip(&feed.trips);
    assert_round_trip(&feed.stop_times);
    assert_round_trip(&feed.calendars);
    assert_round_trip(&feed.calendar_dates);
    assert_round_trip(&feed.fare_attributes);
    assert_round_trip(&feed.fare_rules);
    assert_round_trip(&feed.shapes);
    assert_round_trip(&feed.frequencies);
    assert_round_trip(&feed.transfers);
    assert_round_trip(&feed.feed_info);
}
