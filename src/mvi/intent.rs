/// Marker for values a reducer consumes.
///
/// An intent is created once and consumed once; reducers take it by value.
pub trait Intent: Send + 'static {}
