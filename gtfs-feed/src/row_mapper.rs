//! Turns one csv record into one entity, walking the entity's column table
use crate::error::ConversionError;
use crate::gtfs_reader::Strictness;
use crate::schema::Entity;
use crate::Error;
use csv::StringRecord;
use std::collections::HashMap;

/// Position of every column of a file, built once from its header
#[derive(Debug, Default, Clone)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
    names: Vec<String>,
}

impl HeaderIndex {
    /// Position of the column, if the header declares it
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Column names, in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl From<&StringRecord> for HeaderIndex {
    fn from(header: &StringRecord) -> Self {
        let names: Vec<String> = header.iter().map(|h| h.trim().to_owned()).collect();
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            // When a column is repeated, the first one is used
            positions.entry(name.clone()).or_insert(i);
        }
        Self { positions, names }
    }
}

/// Fails on the first required column of the entity that the header does not declare
pub fn check_header<E: Entity>(index: &HeaderIndex, file_name: &str) -> Result<(), Error> {
    match E::SCHEMA
        .iter()
        .find(|f| f.required && index.position(f.column).is_none())
    {
        Some(field) => Err(Error::RequiredFieldMissing {
            file_name: file_name.to_owned(),
            field_name: field.column.to_owned(),
            line: 1,
        }),
        None => Ok(()),
    }
}

/// Builds an entity from a record
///
/// A column missing from the header is read as an empty cell, unless it is required.
/// An empty cell for a field without null representation leaves the field at its default value.
pub fn map_row<E: Entity>(
    record: &StringRecord,
    index: &HeaderIndex,
    file_name: &str,
    strictness: Strictness,
) -> Result<E, Error> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let missing = |field_name: &str| Error::RequiredFieldMissing {
        file_name: file_name.to_owned(),
        field_name: field_name.to_owned(),
        line,
    };

    let mut entity = E::default();
    for field in E::SCHEMA {
        let raw = match index.position(field.column) {
            // Short rows are allowed, missing trailing cells are empty
            Some(i) => record.get(i).unwrap_or(""),
            None if field.required => return Err(missing(field.column)),
            None => "",
        };
        if raw.is_empty() && field.required {
            return Err(missing(field.column));
        }
        match (field.read)(&mut entity, raw) {
            Ok(()) => {}
            Err(ConversionError::Empty) if !field.required => {}
            Err(reason) if field.required || strictness == Strictness::Strict => {
                return Err(Error::MalformedValue {
                    file_name: file_name.to_owned(),
                    field_name: field.column.to_owned(),
                    value: raw.to_owned(),
                    reason,
                    line,
                })
            }
            Err(reason) => {
                warn!(
                    "{} line {}: ignoring value '{}' of {} ({})",
                    file_name, line, raw, field.column, reason
                );
            }
        }
    }
    Ok(entity)
}

/// Header listing every column of the entity
pub fn header<E: Entity>() -> StringRecord {
    StringRecord::from(E::columns())
}

/// Writes the entity back as a record aligned with [header]
pub fn to_record<E: Entity>(entity: &E) -> StringRecord {
    E::SCHEMA
        .iter()
        .map(|field| (field.write)(entity))
        .collect()
}
