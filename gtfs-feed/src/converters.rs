//! The catalog of value codecs between raw GTFS cells and typed fields
//!
//! Every column of every [crate::schema::Entity] goes through exactly one of them.
//! `parse` is used when reading and `format` is its symmetric counterpart, so that
//! formatting a parsed value and parsing it again gives back the same value.
use crate::enums::GtfsEnum;
use crate::error::ConversionError;
use crate::objects::TimeOfDay;
use crate::Error;
use chrono::NaiveDate;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

/// Identifies the converter used by a field descriptor
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConverterId {
    /// [Text]
    Text,
    /// [OptionalText]
    OptionalText,
    /// [Integer]
    Integer,
    /// [OptionalInteger]
    OptionalInteger,
    /// [Float]
    Float,
    /// [OptionalFloat]
    OptionalFloat,
    /// [Digit]
    Digit,
    /// [OptionalDigit]
    OptionalDigit,
    /// [Date]
    Date,
    /// [OptionalDate]
    OptionalDate,
    /// [Time]
    Time,
    /// [OptionalTime]
    OptionalTime,
    /// [Color]
    Color,
    /// [Code]
    Code,
    /// [OptionalCode]
    OptionalCode,
}

/// A bidirectional codec between a raw cell and a typed value
pub trait Converter {
    /// Type of the converted value
    type Value;
    /// Identifier of the converter in the catalog
    const ID: ConverterId;
    /// Converts a raw (already trimmed) cell
    ///
    /// An empty cell gives [ConversionError::Empty] unless the value has a null representation
    fn parse(raw: &str) -> Result<Self::Value, ConversionError>;
    /// Writes the value the way [Converter::parse] reads it
    fn format(value: &Self::Value) -> String;
}

/// Plain text. An empty cell is an empty string, never null
pub struct Text;
/// Nullable text. An empty cell is `None`
pub struct OptionalText;
/// Any integer type
pub struct Integer<T>(PhantomData<T>);
/// Nullable integer. An empty cell is `None`
pub struct OptionalInteger<T>(PhantomData<T>);
/// Any floating point type
pub struct Float<T>(PhantomData<T>);
/// Nullable floating point. An empty cell is `None`
pub struct OptionalFloat<T>(PhantomData<T>);
/// Boolean written as `0` or `1`
pub struct Digit;
/// Nullable boolean written as `0` or `1`
pub struct OptionalDigit;
/// Date written as `YYYYMMDD`
pub struct Date;
/// Nullable date written as `YYYYMMDD`
pub struct OptionalDate;
/// Time of the service day written `H:MM:SS`, hours can exceed 23
pub struct Time;
/// Nullable time of the service day
pub struct OptionalTime;
/// `RRGGBB` color packed as a signed `0xAARRGGBB` integer, always nullable
pub struct Color;
/// Enumeration stored as an integer code
pub struct Code<E>(PhantomData<E>);
/// Nullable enumeration stored as an integer code
pub struct OptionalCode<E>(PhantomData<E>);

fn optional<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, ConversionError>,
) -> Result<Option<T>, ConversionError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        parse(raw).map(Some)
    }
}

fn format_optional<T>(value: &Option<T>, format: impl FnOnce(&T) -> String) -> String {
    value.as_ref().map(format).unwrap_or_default()
}

fn parse_number<T>(raw: &str, kind: &str) -> Result<T, ConversionError>
where
    T: FromStr,
    T::Err: Display,
{
    if raw.is_empty() {
        return Err(ConversionError::Empty);
    }
    raw.parse()
        .map_err(|e| ConversionError::Malformed(format!("'{raw}' is not a valid {kind}: {e}")))
}

/// Floating point types a [Float] converter can produce
pub trait FloatValue: FromStr + Display {
    /// False for `NaN` and infinities
    fn is_finite(&self) -> bool;
}

impl FloatValue for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl FloatValue for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

/// Parses a `YYYYMMDD` date. Exactly 8 digits are expected
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDate(s.to_owned()));
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| Error::InvalidDate(s.to_owned()))
}

/// Formats a date as `YYYYMMDD`
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Parses a `RRGGBB` color, with an optional leading `#`, into `0xFFRRGGBB` as an `i32`
///
/// `FFFFFF` gives `-1`
pub fn parse_color(s: &str) -> Result<i32, Error> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(s.to_owned()));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_owned()))?;
    Ok((0xFF00_0000 | rgb) as i32)
}

/// Formats a packed color back as `RRGGBB`
pub fn format_color(color: i32) -> String {
    format!("{:06X}", (color as u32) & 0x00FF_FFFF)
}

fn malformed(e: Error) -> ConversionError {
    ConversionError::Malformed(e.to_string())
}

impl Converter for Text {
    type Value = String;
    const ID: ConverterId = ConverterId::Text;

    fn parse(raw: &str) -> Result<String, ConversionError> {
        Ok(raw.to_owned())
    }

    fn format(value: &String) -> String {
        value.clone()
    }
}

impl Converter for OptionalText {
    type Value = Option<String>;
    const ID: ConverterId = ConverterId::OptionalText;

    fn parse(raw: &str) -> Result<Option<String>, ConversionError> {
        optional(raw, Text::parse)
    }

    fn format(value: &Option<String>) -> String {
        format_optional(value, Text::format)
    }
}

impl<T> Converter for Integer<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    type Value = T;
    const ID: ConverterId = ConverterId::Integer;

    fn parse(raw: &str) -> Result<T, ConversionError> {
        parse_number(raw, "integer")
    }

    fn format(value: &T) -> String {
        value.to_string()
    }
}

impl<T> Converter for OptionalInteger<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    type Value = Option<T>;
    const ID: ConverterId = ConverterId::OptionalInteger;

    fn parse(raw: &str) -> Result<Option<T>, ConversionError> {
        optional(raw, Integer::<T>::parse)
    }

    fn format(value: &Option<T>) -> String {
        format_optional(value, Integer::<T>::format)
    }
}

impl<T> Converter for Float<T>
where
    T: FloatValue,
    T::Err: Display,
{
    type Value = T;
    const ID: ConverterId = ConverterId::Float;

    fn parse(raw: &str) -> Result<T, ConversionError> {
        let value: T = parse_number(raw, "number")?;
        if !value.is_finite() {
            return Err(ConversionError::Malformed(format!(
                "'{raw}' is not a finite number"
            )));
        }
        Ok(value)
    }

    fn format(value: &T) -> String {
        value.to_string()
    }
}

impl<T> Converter for OptionalFloat<T>
where
    T: FloatValue,
    T::Err: Display,
{
    type Value = Option<T>;
    const ID: ConverterId = ConverterId::OptionalFloat;

    fn parse(raw: &str) -> Result<Option<T>, ConversionError> {
        optional(raw, Float::<T>::parse)
    }

    fn format(value: &Option<T>) -> String {
        format_optional(value, Float::<T>::format)
    }
}

impl Converter for Digit {
    type Value = bool;
    const ID: ConverterId = ConverterId::Digit;

    fn parse(raw: &str) -> Result<bool, ConversionError> {
        match raw {
            "" => Err(ConversionError::Empty),
            "0" => Ok(false),
            "1" => Ok(true),
            s => Err(ConversionError::Malformed(format!(
                "Invalid value `{s}`, expected 0 or 1"
            ))),
        }
    }

    fn format(value: &bool) -> String {
        u8::from(*value).to_string()
    }
}

impl Converter for OptionalDigit {
    type Value = Option<bool>;
    const ID: ConverterId = ConverterId::OptionalDigit;

    fn parse(raw: &str) -> Result<Option<bool>, ConversionError> {
        optional(raw, Digit::parse)
    }

    fn format(value: &Option<bool>) -> String {
        format_optional(value, Digit::format)
    }
}

impl Converter for Date {
    type Value = NaiveDate;
    const ID: ConverterId = ConverterId::Date;

    fn parse(raw: &str) -> Result<NaiveDate, ConversionError> {
        if raw.is_empty() {
            return Err(ConversionError::Empty);
        }
        parse_date(raw).map_err(malformed)
    }

    fn format(value: &NaiveDate) -> String {
        format_date(value)
    }
}

impl Converter for OptionalDate {
    type Value = Option<NaiveDate>;
    const ID: ConverterId = ConverterId::OptionalDate;

    fn parse(raw: &str) -> Result<Option<NaiveDate>, ConversionError> {
        optional(raw, Date::parse)
    }

    fn format(value: &Option<NaiveDate>) -> String {
        format_optional(value, format_date)
    }
}

impl Converter for Time {
    type Value = TimeOfDay;
    const ID: ConverterId = ConverterId::Time;

    fn parse(raw: &str) -> Result<TimeOfDay, ConversionError> {
        if raw.is_empty() {
            return Err(ConversionError::Empty);
        }
        raw.parse().map_err(malformed)
    }

    fn format(value: &TimeOfDay) -> String {
        value.to_string()
    }
}

impl Converter for OptionalTime {
    type Value = Option<TimeOfDay>;
    const ID: ConverterId = ConverterId::OptionalTime;

    fn parse(raw: &str) -> Result<Option<TimeOfDay>, ConversionError> {
        optional(raw, Time::parse)
    }

    fn format(value: &Option<TimeOfDay>) -> String {
        format_optional(value, Time::format)
    }
}

impl Converter for Color {
    type Value = Option<i32>;
    const ID: ConverterId = ConverterId::Color;

    fn parse(raw: &str) -> Result<Option<i32>, ConversionError> {
        optional(raw, |s| parse_color(s).map_err(malformed))
    }

    fn format(value: &Option<i32>) -> String {
        format_optional(value, |c| format_color(*c))
    }
}

impl<E: GtfsEnum> Converter for Code<E> {
    type Value = E;
    const ID: ConverterId = ConverterId::Code;

    fn parse(raw: &str) -> Result<E, ConversionError> {
        if raw.is_empty() {
            return Err(ConversionError::Empty);
        }
        let code: i32 = raw.parse().map_err(|_| {
            ConversionError::Malformed(format!(
                "invalid value for {}, must be an integer: {raw}",
                E::NAME
            ))
        })?;
        E::from_code(code).ok_or_else(|| {
            ConversionError::Malformed(format!("{code} is not a known {}", E::NAME))
        })
    }

    fn format(value: &E) -> String {
        value.code().to_string()
    }
}

impl<E: GtfsEnum> Converter for OptionalCode<E> {
    type Value = Option<E>;
    const ID: ConverterId = ConverterId::OptionalCode;

    fn parse(raw: &str) -> Result<Option<E>, ConversionError> {
        optional(raw, Code::<E>::parse)
    }

    fn format(value: &Option<E>) -> String {
        format_optional(value, Code::<E>::format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{PickupDropOffType, RouteType};

    #[test]
    fn time_with_one_or_two_digit_hours() {
        assert_eq!(Ok(TimeOfDay::new(6, 0, 0)), Time::parse("6:00:00"));
        assert_eq!(Ok(TimeOfDay::new(16, 0, 0)), Time::parse("16:00:00"));
        assert_eq!(Ok(TimeOfDay::new(18, 59, 59)), Time::parse("18:59:59"));
    }

    #[test]
    fn time_after_midnight_is_not_wrapped() {
        let time = Time::parse("25:30:00").unwrap();
        assert_eq!(25, time.hours);
        assert_eq!(30, time.minutes);
        assert_eq!(0, time.seconds);
        assert_eq!(25 * 3600 + 30 * 60, time.total_seconds());
        assert_eq!("25:30:00", Time::format(&time));
    }

    #[test]
    fn invalid_times() {
        for raw in ["6:00", "6h00:00", "06:0:00", "06:60:00", "::", "6:00:00:00"] {
            assert!(
                matches!(Time::parse(raw), Err(ConversionError::Malformed(_))),
                "{raw} should be rejected"
            );
        }
        assert_eq!(Err(ConversionError::Empty), Time::parse(""));
        assert_eq!(Ok(None), OptionalTime::parse(""));
    }

    #[test]
    fn dates() {
        assert_eq!(
            NaiveDate::from_ymd_opt(2007, 6, 4).unwrap(),
            Date::parse("20070604").unwrap()
        );
        assert!(Date::parse("2007064").is_err());
        assert!(Date::parse("2007-6-04").is_err());
        assert!(Date::parse("20071304").is_err());
        assert_eq!(Ok(None), OptionalDate::parse(""));
        assert_eq!(
            "20101231",
            Date::format(&NaiveDate::from_ymd_opt(2010, 12, 31).unwrap())
        );
    }

    #[test]
    fn colors() {
        assert_eq!(Ok(None), Color::parse(""));
        assert_eq!(Ok(Some(-1)), Color::parse("FFFFFF"));
        assert_eq!(Ok(Some(-3932017)), Color::parse("C4008F"));
        assert_eq!(Ok(Some(-16777216)), Color::parse("#000000"));
        assert!(Color::parse("FFF").is_err());
        assert!(Color::parse("GGGGGG").is_err());
        assert_eq!("C4008F", Color::format(&Some(-3932017)));
        assert_eq!("", Color::format(&None));
    }

    #[test]
    fn text_and_nullable_text() {
        assert_eq!(Ok(String::new()), Text::parse(""));
        assert_eq!(Ok(None), OptionalText::parse(""));
        assert_eq!(Ok(Some("DTA".to_owned())), OptionalText::parse("DTA"));
    }

    #[test]
    fn digits() {
        assert_eq!(Ok(true), Digit::parse("1"));
        assert_eq!(Ok(false), Digit::parse("0"));
        assert_eq!(Err(ConversionError::Empty), Digit::parse(""));
        assert!(Digit::parse("2").is_err());
        assert_eq!(Ok(None), OptionalDigit::parse(""));
        assert_eq!("1", Digit::format(&true));
    }

    #[test]
    fn numbers() {
        assert_eq!(Ok(1800), Integer::<u32>::parse("1800"));
        assert_eq!(Err(ConversionError::Empty), Integer::<u32>::parse(""));
        assert!(Integer::<u32>::parse("-3").is_err());
        assert_eq!(Ok(None), OptionalInteger::<u32>::parse(""));
        assert_eq!(Ok(36.425288), Float::<f64>::parse("36.425288"));
        assert_eq!(Ok(None), OptionalFloat::<f64>::parse(""));
        assert!(Float::<f64>::parse("north").is_err());
    }

    #[test]
    fn non_finite_floats() {
        for raw in ["NaN", "inf", "-infinity", "1e400"] {
            assert!(
                matches!(Float::<f64>::parse(raw), Err(ConversionError::Malformed(_))),
                "{raw} should be rejected"
            );
        }
        assert!(OptionalFloat::<f64>::parse("nan").is_err());
        assert_eq!(Ok(Some(1e5)), OptionalFloat::<f64>::parse("1e5"));
    }

    #[test]
    fn codes() {
        assert_eq!(Ok(RouteType::Bus), Code::<RouteType>::parse("3"));
        assert!(Code::<RouteType>::parse("42").is_err());
        assert!(Code::<RouteType>::parse("bus").is_err());
        assert_eq!(Ok(None), OptionalCode::<PickupDropOffType>::parse(""));
        assert_eq!(
            Ok(Some(PickupDropOffType::Regular)),
            OptionalCode::<PickupDropOffType>::parse("0")
        );
        assert_eq!("3", Code::<RouteType>::format(&RouteType::Bus));
    }
}
