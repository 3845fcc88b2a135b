/// Marker for reducer-owned state.
///
/// `PartialEq` lets owners skip publishing a snapshot that did not change.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
