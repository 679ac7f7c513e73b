use chrono::Utc;

use crate::feed::{Feed, GtfsFeed};
use crate::error::LineError;
use crate::objects::*;
use crate::row_mapper::{check_header, map_row, HeaderIndex};
use crate::schema::{Entity, GtfsFile};
use crate::source::{DirectorySource, GtfsSource, ZipSource};
use crate::Error;
use std::io::Read;
use std::path::Path;

/// What to do with a row that cannot be read
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq)]
#[derivative(Default)]
pub enum Strictness {
    /// Any invalid row aborts the whole read
    #[derivative(Default)]
    Strict,
    /// Invalid rows are skipped, and invalid optional values are left empty
    Tolerant,
}

/// Allows to parameterize how the parsing library behaves
///
/// ```
///let feed: gtfs_feed::Feed = gtfs_feed::GtfsReader::default()
///    .read_stop_times(false) // Won’t read the stop times to save time and memory
///    .read_from_path("fixtures/sample-feed")?;
///assert_eq!(11, feed.trips.len());
///assert_eq!(0, feed.stop_times.len());
/// # Ok::<(), gtfs_feed::Error>(())
///```
///
/// A tolerant reader skips the rows it cannot read instead of failing
/// ```
///let mut source = gtfs_feed::MemorySource::new()
///    .with("agency.txt", "agency_id,agency_name,agency_url,agency_timezone\nDTA,,http://google.com,UTC\n");
///let feed: gtfs_feed::Feed = gtfs_feed::GtfsReader::new(false)
///    .required_files(vec![])
///    .read(&mut source)?;
///assert!(feed.agencies.is_empty());
/// # Ok::<(), gtfs_feed::Error>(())
///```
#[derive(Derivative, Debug, Clone)]
#[derivative(Default)]
pub struct GtfsReader {
    /// Whether an invalid row aborts the read (default) or is skipped
    pub strictness: Strictness,
    /// [crate::objects::StopTime] are very large and not always needed. This allows to skip reading them
    #[derivative(Default(value = "true"))]
    pub read_stop_times: bool,
    /// Avoid trimming the fields
    ///
    /// It is quite time consumming
    /// If performance is an issue, and if your data is high quality, you can switch it off
    #[derivative(Default(value = "true"))]
    pub trim_fields: bool,
    /// Files whose absence makes the read fail. Other files are skipped when absent
    #[derivative(Default(value = "GtfsFile::REQUIRED.to_vec()"))]
    pub required_files: Vec<GtfsFile>,
}

impl GtfsReader {
    /// Creates a strict (`true`) or tolerant (`false`) reader
    pub fn new(strict: bool) -> Self {
        Self::default().strict(strict)
    }

    /// Should an invalid row abort the whole read (default: true)
    ///
    /// When false, invalid rows are skipped and logged
    /// Returns Self and can be chained
    pub fn strict(mut self, strict: bool) -> Self {
        self.strictness = if strict {
            Strictness::Strict
        } else {
            Strictness::Tolerant
        };
        self
    }

    /// Configures the reader to read or not the stop times (default: true)
    ///
    /// This can be useful to save time and memory with large datasets when the timetable are not needed
    /// Returns Self and can be chained
    pub fn read_stop_times(mut self, read_stop_times: bool) -> Self {
        self.read_stop_times = read_stop_times;
        self
    }

    /// Should the fields be trimmed (default: true)
    ///
    /// It is quite time consumming
    /// If performance is an issue, and if your data is high quality, you can set it to false
    pub fn trim_fields(mut self, trim_fields: bool) -> Self {
        self.trim_fields = trim_fields;
        self
    }

    /// Files that must be present (default: agency, stops, routes, trips and stop_times)
    pub fn required_files(mut self, required_files: Vec<GtfsFile>) -> Self {
        self.required_files = required_files;
        self
    }

    /// Reads a local zip archive or local directory
    pub fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Feed, Error> {
        let p = path.as_ref();
        if p.is_file() {
            let mut source = ZipSource::from_path(p)?;
            info!("reading {} (sha256 {})", p.display(), source.sha256());
            self.read(&mut source)
        } else if p.is_dir() {
            info!("reading directory {}", p.display());
            self.read(&mut DirectorySource::new(p)?)
        } else {
            Err(Error::NotFileNorDirectory(format!("{}", p.display())))
        }
    }

    /// Reads every known file of the source into a new feed
    ///
    /// Each entity collection keeps the order of the rows of its file
    pub fn read<F: GtfsFeed, S: GtfsSource>(&self, source: &mut S) -> Result<F, Error> {
        let now = Utc::now();
        let mut feed = F::default();
        for file in GtfsFile::ALL {
            if file == GtfsFile::StopTimes && !self.read_stop_times {
                debug!("skipping {}", file);
                continue;
            }
            self.read_into(source, file, &mut feed)?;
        }
        feed.record_source(
            source.names(),
            Utc::now().signed_duration_since(now).num_milliseconds(),
        );
        Ok(feed)
    }

    /// Reads a single file of the source into a new feed
    ///
    /// The file is always required
    pub fn read_file<F: GtfsFeed, S: GtfsSource>(
        &self,
        source: &mut S,
        file: GtfsFile,
    ) -> Result<F, Error> {
        let mut feed = F::default();
        if !self.read_into(source, file, &mut feed)? {
            return Err(Error::MissingFile(file.name().to_owned()));
        }
        Ok(feed)
    }

    /// Returns false if the source does not have the file
    fn read_into<F: GtfsFeed, S: GtfsSource>(
        &self,
        source: &mut S,
        file: GtfsFile,
        feed: &mut F,
    ) -> Result<bool, Error> {
        let reader = match source.open(file.name())? {
            Some(reader) => reader,
            None if self.required_files.contains(&file) => {
                return Err(Error::MissingFile(file.name().to_owned()))
            }
            None => {
                debug!("optional file {} not found", file);
                return Ok(false);
            }
        };
        let count = match file {
            GtfsFile::Agency => self.read_objs(reader, |o: Agency| feed.add_agency(o)),
            GtfsFile::Stops => self.read_objs(reader, |o: Stop| feed.add_stop(o)),
            GtfsFile::Routes => self.read_objs(reader, |o: Route| feed.add_route(o)),
            GtfsFile::Trips => self.read_objs(reader, |o: Trip| feed.add_trip(o)),
            GtfsFile::StopTimes => self.read_objs(reader, |o: StopTime| feed.add_stop_time(o)),
            GtfsFile::Calendar => self.read_objs(reader, |o: Calendar| feed.add_calendar(o)),
            GtfsFile::CalendarDates => {
                self.read_objs(reader, |o: CalendarDate| feed.add_calendar_date(o))
            }
            GtfsFile::FareAttributes => {
                self.read_objs(reader, |o: FareAttribute| feed.add_fare_attribute(o))
            }
            GtfsFile::FareRules => self.read_objs(reader, |o: FareRule| feed.add_fare_rule(o)),
            GtfsFile::Shapes => self.read_objs(reader, |o: Shape| feed.add_shape(o)),
            GtfsFile::Frequencies => self.read_objs(reader, |o: Frequency| feed.add_frequency(o)),
            GtfsFile::Transfers => self.read_objs(reader, |o: Transfer| feed.add_transfer(o)),
            GtfsFile::FeedInfo => self.read_objs(reader, |o: FeedInfo| feed.add_feed_info(o)),
        }?;
        info!("read {} objects from {}", count, file);
        Ok(true)
    }

    /// Maps every row of the file and hands the entities to `add`, in file order
    ///
    /// Returns the number of entities added
    fn read_objs<E, R, A>(&self, mut reader: R, mut add: A) -> Result<usize, Error>
    where
        E: Entity,
        R: Read,
        A: FnMut(E),
    {
        let file_name = E::FILE.name();
        let mut head = Vec::with_capacity(3);
        (&mut reader)
            .take(3)
            .read_to_end(&mut head)
            .map_err(|e| Error::NamedFileIO {
                file_name: file_name.to_owned(),
                source: Box::new(e),
            })?;
        if head == [0xef, 0xbb, 0xbf] {
            head.clear();
        }
        let chained = head.as_slice().chain(reader);

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(if self.trim_fields {
                csv::Trim::Fields
            } else {
                csv::Trim::None
            })
            .from_reader(chained);
        let headers = reader
            .headers()
            .map_err(|e| Error::CSVError {
                file_name: file_name.to_owned(),
                source: e,
            })?
            .clone();
        let index = HeaderIndex::from(&headers);
        if self.strictness == Strictness::Strict {
            check_header::<E>(&index, file_name)?;
        }

        // Pre-allocate a ByteRecord for performance reasons
        let mut rec = csv::ByteRecord::new();
        let mut count = 0;

        // Read each record into the pre-allocated ByteRecord one at a time
        while reader.read_byte_record(&mut rec).map_err(|e| Error::CSVError {
            file_name: file_name.to_owned(),
            source: e,
        })? {
            let bytes = std::mem::replace(&mut rec, csv::ByteRecord::new());
            let row = match csv::StringRecord::from_byte_record(bytes) {
                Ok(row) => row,
                Err(e) => {
                    let err = invalid_encoding(file_name, &index, e);
                    if self.strictness == Strictness::Tolerant {
                        warn!("skipping row: {}", err);
                        continue;
                    }
                    return Err(err);
                }
            };
            match map_row::<E>(&row, &index, file_name, self.strictness) {
                Ok(obj) => {
                    add(obj);
                    count += 1;
                }
                Err(e) if e.is_row_error() && self.strictness == Strictness::Tolerant => {
                    warn!("skipping row: {}", e);
                }
                Err(e) => return Err(e),
            }
            rec = row.into_byte_record();
        }
        Ok(count)
    }
}

/// The headers are returned along the values of the row, to locate the faulty cell
fn invalid_encoding(file_name: &str, index: &HeaderIndex, e: csv::FromUtf8Error) -> Error {
    // csv only exposes the failing record by value; re-validating the same
    // bytes yields the identical error to keep as `source`
    let record = e.into_byte_record();
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let values = record
        .iter()
        .map(|v| String::from_utf8_lossy(v).into_owned())
        .collect();
    Error::InvalidEncoding {
        file_name: file_name.to_owned(),
        line,
        line_in_error: LineError {
            headers: index.names().to_vec(),
            values,
        },
        source: csv::StringRecord::from_byte_record(record)
            .expect_err("record already failed UTF-8 validation"),
    }
}
