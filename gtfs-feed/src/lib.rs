/*! The [General Transit Feed Specification](https://gtfs.org/) (GTFS) is a commonly used model to represent public transit data.

This crate reads the text files of a GTFS feed into typed Rust structures.

To get started, see [Feed] and [GtfsReader].

## What is GTFS

A Gtfs feed is a collection of CSV files (often bundled as a zip file).
Each file represents a collection of one type (stops, lines, etc.) that have relationships through unique identifiers.

## Design decisions

### One reading algorithm

Every entity type declares a column table ([schema::Entity::SCHEMA]): for each column, the field it feeds,
the [converters::Converter] decoding it and whether it is required. The [GtfsReader] and the [row_mapper] only walk
those tables, there is no code specific to a file.

### Strict and tolerant reading

By default, any row that cannot be read aborts the whole read with an error naming the file, the field and the line.
A tolerant reader ([GtfsReader::new] with `false`) skips those rows and logs them instead.

### Use of Enum

Many values are integers that are actually enumerations of certain values. We always use Rust enums, like [LocationType] to represent them, and not the integer value.
An absent optional value is `None`, never a variant.

### Reference

We try to stick as closely as possible to the reference. Optional fields are [std::option], while missing mandatory elements will result in an error.

There are two references <https://gtfs.org/reference/static> and <https://developers.google.com/transit/gtfs/reference>. They are mostly the same, even if google’s specification has some extensions.

### Renaming

We kept some names even if they can be confusing (a [Calendar] will be referenced by `service_id`), but we strip the object type (`route_short_name` is [Route::short_name]).

*/
#![warn(missing_docs)]

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

#[macro_use]
pub mod schema;

pub mod converters;
mod enums;
pub mod error;
mod feed;
mod gtfs_reader;
pub(crate) mod objects;
pub mod row_mapper;
pub mod source;

#[cfg(test)]
mod tests;

pub use enums::GtfsEnum;
pub use error::Error;
pub use feed::{Feed, GtfsFeed};
pub use gtfs_reader::{GtfsReader, Strictness};
pub use objects::*;
pub use schema::{Entity, GtfsFile};
pub use source::{DirectorySource, GtfsSource, MemorySource, ZipSource};
