mod coordinates;
mod date;
mod paginated;

pub use coordinates::{PointCoordinates, parse_point_coordinates};
pub use date::{
    DatePrecision, DateWithPrecision, deserialize_lenient_date, format_date, format_optional,
    format_raw, parse_calendar_date,
};
pub use paginated::Paginated;
