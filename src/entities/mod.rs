mod location;
mod route_result;

pub use location::Location;
pub use route_result::RouteResult;
