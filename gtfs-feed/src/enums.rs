/// Enumerations stored in GTFS as an integer code
///
/// The set of codes is closed: a code outside of the table is an error, and an absent
/// value is represented by wrapping the enumeration in an [Option], never by a variant.
pub trait GtfsEnum: Sized + Copy {
    /// Name used in error messages
    const NAME: &'static str;
    /// Variant for a code, if the code is known
    fn from_code(code: i32) -> Option<Self>;
    /// Code of the variant, as written in the files
    fn code(self) -> i32;
}

macro_rules! gtfs_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl GtfsEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn from_code(code: i32) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }
        }
    };
}

gtfs_enum! {
    /// Describes the kind of [crate::Route]. See <https://gtfs.org/reference/static/#routestxt> `route_type`
    RouteType {
        /// Tram, Streetcar, Light rail. Any light rail or street level system within a metropolitan area
        Tram = 0,
        /// Any underground rail system within a metropolitan area
        Subway = 1,
        /// Used for intercity or long-distance travel
        Rail = 2,
        /// Used for short- and long-distance bus routes
        Bus = 3,
        /// Used for short- and long-distance boat service
        Ferry = 4,
        /// Used for street-level rail cars where the cable runs beneath the vehicle, e.g., cable car in San Francisco
        CableCar = 5,
        /// Aerial lift, suspended cable car (e.g., gondola lift, aerial tramway)
        Gondola = 6,
        /// Any rail system designed for steep inclines
        Funicular = 7,
        /// Electric buses that draw power from overhead wires using poles
        Trolleybus = 11,
        /// Railway in which the track consists of a single rail or a beam
        Monorail = 12,
    }
}

gtfs_enum! {
    /// Describes the kind of [crate::Stop]. See <https://gtfs.org/reference/static/#stopstxt> `location_type`
    LocationType {
        /// Stop (or Platform). A location where passengers board or disembark from a transit vehicle
        Stop = 0,
        /// Station. A physical structure or area that contains one or more platform
        Station = 1,
        /// A location where passengers can enter or exit a station from the street
        EntranceExit = 2,
        /// A location within a station, not matching any other location type
        GenericNode = 3,
        /// A specific location on a platform, where passengers can board and/or alight vehicles
        BoardingArea = 4,
    }
}

gtfs_enum! {
    /// Describes if and how a traveller can board or alight the vehicle. See <https://gtfs.org/reference/static/#stop_timestxt> `pickup_type` and `drop_off_type`
    PickupDropOffType {
        /// Regularly scheduled pickup or drop off
        Regular = 0,
        /// No pickup or drop off available
        NotAvailable = 1,
        /// Must phone agency to arrange pickup or drop off
        PhoneAgency = 2,
        /// Must coordinate with driver to arrange pickup or drop off
        CoordinateWithDriver = 3,
    }
}

gtfs_enum! {
    /// Indicates whether a rider can board or alight anywhere along the vehicle’s travel path
    ContinuousPickupDropOff {
        /// Continuous stopping pickup or drop off
        Continuous = 0,
        /// No continuous stopping pickup or drop off
        NotAvailable = 1,
        /// Must phone agency to arrange continuous stopping pickup or drop off
        PhoneAgency = 2,
        /// Must coordinate with driver to arrange continuous stopping pickup or drop off
        CoordinateWithDriver = 3,
    }
}

gtfs_enum! {
    /// Direction of a [crate::Trip], only for display. See <https://gtfs.org/reference/static/#tripstxt> `direction_id`
    DirectionType {
        /// Travel in one direction (e.g. outbound travel)
        OneDirection = 0,
        /// Travel in the opposite direction (e.g. inbound travel)
        OppositeDirection = 1,
    }
}

gtfs_enum! {
    /// Defines if a [crate::CalendarDate] adds or removes the service on that date
    ExceptionType {
        /// There will be a service on that day
        Added = 1,
        /// There won’t be a service on that day
        Removed = 2,
    }
}

gtfs_enum! {
    /// Defines where a [crate::FareAttribute] can be paid
    PaymentMethodType {
        /// Fare is paid on board
        OnBoard = 0,
        /// Fare must be paid before boarding
        BeforeBoarding = 1,
    }
}

gtfs_enum! {
    /// Defines the type of a [crate::Transfer]
    TransferType {
        /// Recommended transfer point between routes
        Recommended = 0,
        /// Departing vehicle waits for arriving one
        Timed = 1,
        /// Transfer requires a minimum amount of time between arrival and departure
        MinimumTime = 2,
        /// Transfer is not possible at this location
        NotPossible = 3,
    }
}

gtfs_enum! {
    /// Whether wheelchair boarding is possible at a stop or on a trip
    WheelchairAccessibility {
        /// No accessibility information
        NoInformation = 0,
        /// At least some vehicles (or some paths of the station) are accessible
        Accessible = 1,
        /// Wheelchair boarding is not possible
        NotAccessible = 2,
    }
}

gtfs_enum! {
    /// Is the [crate::Trip] accessible with a bike. See <https://gtfs.org/reference/static/#tripstxt> `bikes_allowed`
    BikesAllowed {
        /// No bike information for the trip
        NoInformation = 0,
        /// Vehicle being used on this particular trip can accommodate at least one bicycle
        Allowed = 1,
        /// No bicycles are allowed on this trip
        NotAllowed = 2,
    }
}

#[test]
fn route_type_codes() {
    assert_eq!(Some(RouteType::Bus), RouteType::from_code(3));
    assert_eq!(Some(RouteType::Monorail), RouteType::from_code(12));
    assert_eq!(None, RouteType::from_code(42));
    assert_eq!(7, RouteType::Funicular.code());
}

#[test]
fn code_zero_is_a_variant() {
    assert_eq!(
        Some(PickupDropOffType::Regular),
        PickupDropOffType::from_code(0)
    );
    assert_eq!(
        Some(ContinuousPickupDropOff::Continuous),
        ContinuousPickupDropOff::from_code(0)
    );
    assert_eq!(None, ExceptionType::from_code(0));
}
